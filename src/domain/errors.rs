use derive_more::Display;

use super::axis::AxisId;

/// Failures can only come from the host boundary; drag arithmetic itself is total.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AxisDragError {
    #[display(fmt = "Invalid options: {}", _0)]
    InvalidOptions(String),
    #[display(fmt = "Host API error: {}", _0)]
    HostApi(String),
    #[display(fmt = "Unknown axis: {}", _0)]
    UnknownAxis(AxisId),
}

impl std::error::Error for AxisDragError {}

impl From<serde_json::Error> for AxisDragError {
    fn from(err: serde_json::Error) -> Self {
        AxisDragError::InvalidOptions(err.to_string())
    }
}

impl From<AxisDragError> for wasm_bindgen::JsValue {
    fn from(err: AxisDragError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type DragResult<T> = Result<T, AxisDragError>;
