use super::value_objects::{AxisExtremes, AxisSide, DataRange, Extremes, LabelAlign};
use super::{Animation, ScalableAxis};
use crate::domain::errors::DragResult;

/// Pixel placement of an axis inside the chart container.
///
/// `right` and `bottom` are offsets from the container's right and bottom
/// edges, the same way the host chart reports them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLayout {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub side: AxisSide,
    pub label_align: LabelAlign,
}

impl AxisLayout {
    pub fn height(&self, container_height: f64) -> f64 {
        container_height - self.top - self.bottom
    }
}

/// Entity - a linear vertical axis kept in memory.
///
/// Used by the Leptos host and by tests; the browser plugin talks to the
/// host chart's own axis objects instead.
#[derive(Debug, Clone)]
pub struct ScaleAxis {
    pub layout: AxisLayout,
    /// Pixel length of the plotted area along the axis
    pub length: f64,
    data: DataRange,
    user: Option<Extremes>,
    redraw_count: u32,
}

impl ScaleAxis {
    pub fn new(layout: AxisLayout, length: f64, data: DataRange) -> Self {
        Self { layout, length, data, user: None, redraw_count: 0 }
    }

    pub fn data_range(&self) -> DataRange {
        self.data
    }

    pub fn current(&self) -> Extremes {
        self.user.unwrap_or_else(|| self.data.as_extremes())
    }

    pub fn has_user_extremes(&self) -> bool {
        self.user.is_some()
    }

    /// Number of redraws requested through `set_extremes`
    pub fn redraw_count(&self) -> u32 {
        self.redraw_count
    }

    /// Value to chart pixel, the inverse of `to_value`.
    pub fn to_pixel(&self, value: f64) -> f64 {
        let extremes = self.current();
        let span = extremes.span();
        if span == 0.0 {
            return self.layout.top + self.length / 2.0;
        }
        self.layout.top + (extremes.max - value) / span * self.length
    }
}

impl ScalableAxis for ScaleAxis {
    fn to_value(&self, pixel: f64) -> DragResult<f64> {
        let extremes = self.current();
        if self.length <= 0.0 {
            return Ok(extremes.min);
        }
        let ratio = (pixel - self.layout.top) / self.length;
        Ok(extremes.max - ratio * extremes.span())
    }

    fn extremes(&self) -> DragResult<AxisExtremes> {
        Ok(AxisExtremes { current: self.current(), data: self.data })
    }

    fn set_extremes(&mut self, extremes: Extremes, redraw: bool, _animation: Animation) -> DragResult<()> {
        self.user = Some(extremes);
        if redraw {
            self.redraw_count += 1;
        }
        Ok(())
    }

    fn reset_extremes(&mut self, redraw: bool) -> DragResult<()> {
        self.user = None;
        if redraw {
            self.redraw_count += 1;
        }
        Ok(())
    }
}
