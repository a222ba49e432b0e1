//! Axis aggregate: value objects, the in-memory axis and hit-region geometry.

pub mod entities;
pub mod geometry;
pub mod value_objects;

pub use entities::*;
pub use geometry::*;
pub use value_objects::*;

use serde::Deserialize;

use crate::domain::errors::DragResult;

/// Animation requested from the host when extremes change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "AnimationSetting")]
pub enum Animation {
    #[default]
    Disabled,
    /// Host default animation
    Enabled,
    /// Animation with an explicit duration in milliseconds
    Duration(u32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnimationSetting {
    Flag(bool),
    Options { duration: u32 },
}

impl From<AnimationSetting> for Animation {
    fn from(setting: AnimationSetting) -> Self {
        match setting {
            AnimationSetting::Flag(false) => Animation::Disabled,
            AnimationSetting::Flag(true) => Animation::Enabled,
            AnimationSetting::Options { duration } => Animation::Duration(duration),
        }
    }
}

/// Host seam: a vertical axis whose extremes the drag controller may change.
pub trait ScalableAxis {
    /// Axis value under a chart-space vertical pixel, using the current extremes.
    fn to_value(&self, pixel: f64) -> DragResult<f64>;

    fn extremes(&self) -> DragResult<AxisExtremes>;

    fn set_extremes(&mut self, extremes: Extremes, redraw: bool, animation: Animation) -> DragResult<()>;

    /// Return to the data-derived range.
    fn reset_extremes(&mut self, redraw: bool) -> DragResult<()> {
        let data = self.extremes()?.data;
        self.set_extremes(data.as_extremes(), redraw, Animation::Disabled)
    }
}
