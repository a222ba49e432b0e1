use derive_more::Display;
use serde::Serialize;
use strum::EnumString;

/// Value Object - index of an axis among the chart's vertical axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "yAxis[{}]", _0)]
pub struct AxisId(pub usize);

impl AxisId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for AxisId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Value Object - the visible range of an axis
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct Extremes {
    pub min: f64,
    pub max: f64,
}

impl Extremes {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Value Object - range implied by the series data, never changed by dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange {
    pub data_min: f64,
    pub data_max: f64,
}

impl DataRange {
    pub fn new(data_min: f64, data_max: f64) -> Self {
        Self { data_min, data_max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.data_min + self.data_max) / 2.0
    }

    pub fn span(&self) -> f64 {
        self.data_max - self.data_min
    }

    pub fn as_extremes(&self) -> Extremes {
        Extremes::new(self.data_min, self.data_max)
    }
}

/// Extremes as the host reports them: what is shown now plus the data bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtremes {
    pub current: Extremes,
    pub data: DataRange,
}

impl AxisExtremes {
    /// User-set bounds win, missing ones fall back to the data bounds.
    pub fn resolve(user_min: Option<f64>, user_max: Option<f64>, data: DataRange) -> Self {
        Self {
            current: Extremes::new(
                user_min.unwrap_or(data.data_min),
                user_max.unwrap_or(data.data_max),
            ),
            data,
        }
    }
}

/// Which side of the plot the axis renders on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AxisSide {
    #[default]
    #[display(fmt = "normal")]
    Normal,
    #[display(fmt = "opposite")]
    Opposite,
}

impl From<bool> for AxisSide {
    fn from(opposite: bool) -> Self {
        if opposite { AxisSide::Opposite } else { AxisSide::Normal }
    }
}

/// Horizontal alignment of the axis labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LabelAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Which bound a drag session moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DragPortion {
    #[display(fmt = "upper")]
    Upper,
    #[display(fmt = "lower")]
    Lower,
}

impl DragPortion {
    /// Strictly above the data midpoint is the upper portion.
    pub fn classify(anchor_value: f64, data: &DataRange) -> Self {
        if anchor_value > data.midpoint() {
            DragPortion::Upper
        } else {
            DragPortion::Lower
        }
    }
}

/// Value Object - chart container size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Value Object - invisible rectangle over an axis' label area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HitRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}
