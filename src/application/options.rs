use serde::Deserialize;

use crate::domain::axis::{Animation, DEFAULT_HIT_REGION_WIDTH};
use crate::domain::errors::{AxisDragError, DragResult};
use crate::domain::logging::LogLevel;

/// Plugin-wide options, one set per chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScalableAxesOptions {
    /// Drag and reset every scalable axis together
    pub sync_axes: bool,
    pub hit_region_width: f64,
    pub animation: Animation,
    pub log_level: LogLevel,
}

impl Default for ScalableAxesOptions {
    fn default() -> Self {
        Self {
            sync_axes: true,
            hit_region_width: DEFAULT_HIT_REGION_WIDTH,
            animation: Animation::Disabled,
            log_level: LogLevel::Info,
        }
    }
}

impl ScalableAxesOptions {
    pub fn from_json(json: &str) -> DragResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()
    }

    fn validate(self) -> DragResult<Self> {
        if !self.hit_region_width.is_finite() || self.hit_region_width <= 0.0 {
            return Err(AxisDragError::InvalidOptions(format!(
                "hitRegionWidth must be a positive number, got {}",
                self.hit_region_width
            )));
        }
        Ok(self)
    }
}

/// Per-axis options read from the axis' own configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AxisScaleOptions {
    pub scalable: bool,
}

impl Default for AxisScaleOptions {
    fn default() -> Self {
        Self { scalable: true }
    }
}

impl AxisScaleOptions {
    pub fn from_json(json: &str) -> DragResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
