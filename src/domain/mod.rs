//! Pure model of a draggable vertical axis: geometry, extremes and the drag state machine.

pub mod axis;
pub mod drag;
pub mod errors;
pub mod events;
pub mod logging;
