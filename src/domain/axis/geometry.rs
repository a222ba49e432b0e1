use super::entities::AxisLayout;
use super::value_objects::{AxisSide, ContainerSize, HitRect, LabelAlign};

/// Default width of the grab area over the axis labels
pub const DEFAULT_HIT_REGION_WIDTH: f64 = 60.0;

/// Lays out the grab rectangles of all axes of one chart.
///
/// Axes on the same side are stacked outward so their rectangles never
/// overlap: opposite axes move right, normal axes move left. Only scalable
/// axes take up room.
#[derive(Debug, Clone, Copy)]
pub struct HitRegionLayout {
    container: ContainerSize,
    width: f64,
    opposite_offset: f64,
    adjacent_offset: f64,
}

impl HitRegionLayout {
    pub fn new(container: ContainerSize, width: f64) -> Self {
        Self { container, width, opposite_offset: 0.0, adjacent_offset: 0.0 }
    }

    /// Rectangles for every axis in order; `None` where scaling is disabled.
    pub fn compute<'a, I>(container: ContainerSize, width: f64, axes: I) -> Vec<Option<HitRect>>
    where
        I: IntoIterator<Item = (&'a AxisLayout, bool)>,
    {
        let mut layout = Self::new(container, width);
        axes.into_iter()
            .map(|(axis, scalable)| scalable.then(|| layout.place(axis)))
            .collect()
    }

    /// Place the next scalable axis.
    pub fn place(&mut self, axis: &AxisLayout) -> HitRect {
        let align_left = axis.label_align == LabelAlign::Left;
        let x = match axis.side {
            AxisSide::Opposite => {
                let base = if align_left {
                    self.container.width - axis.right
                } else {
                    self.container.width - (axis.right + self.width)
                };
                let x = base + self.opposite_offset;
                self.opposite_offset += self.width;
                x
            }
            AxisSide::Normal => {
                let base = if align_left { axis.left } else { axis.left - self.width };
                let x = base - self.adjacent_offset;
                self.adjacent_offset += self.width;
                x
            }
        };

        HitRect::new(x, axis.top, self.width, axis.height(self.container.height))
    }
}
