//! Drag the label area of a chart's vertical axis to rescale it.
//!
//! Dragging from the upper half of the data range moves the axis maximum,
//! dragging from the lower half moves the minimum, and a double-click puts the
//! axis back on its data range. The same coordinator drives both the
//! Highcharts plugin (`installScalableYAxes` / `attachScalableYAxes`) and the
//! bundled Leptos demo.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
}
