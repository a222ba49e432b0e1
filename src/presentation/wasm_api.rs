use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, JSON, Reflect};
use leptos::ev;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use crate::application::{AxisDragCoordinator, ScalableAxesOptions};
use crate::domain::{
    axis::AxisId,
    errors::{AxisDragError, DragResult},
    logging::{LogComponent, init_logger},
};
use crate::event_utils::{EventListenerHandle, event_listener};
use crate::infrastructure::highcharts::{AxisOverlay, HighchartsAxis, HighchartsChart, RESIZE_CURSOR};
use crate::infrastructure::services::ConsoleLogger;
use crate::{log_error, log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Presentation("ScalableYAxes");

thread_local! {
    static LOAD_HOOK: RefCell<Option<Closure<dyn FnMut(JsValue)>>> = RefCell::new(None);
    static ATTACHED: RefCell<Vec<ScalableYAxes>> = RefCell::new(Vec::new());
    static NEXT_ID: RefCell<u32> = RefCell::new(0);
}

/// Chart state shared by the listeners of one chart.
struct ChartBinding {
    chart: HighchartsChart,
    axes: Vec<HighchartsAxis>,
    coordinator: AxisDragCoordinator,
}

impl ChartBinding {
    fn begin(&mut self, axis: AxisId, event: &MouseEvent) -> DragResult<()> {
        let pixel = self.chart.chart_y(event)?;
        if self.coordinator.begin_drag(axis, pixel, &self.axes)?.is_some() {
            set_body_cursor(RESIZE_CURSOR);
        }
        Ok(())
    }

    fn drag(&mut self, event: &MouseEvent) -> DragResult<()> {
        if !self.coordinator.state().is_dragging() {
            return Ok(());
        }
        let pixel = self.chart.chart_y(event)?;
        self.coordinator.update_drag(pixel, &mut self.axes)?;
        Ok(())
    }

    fn end(&mut self) {
        if self.coordinator.end_drag().is_some() {
            set_body_cursor("default");
        }
    }

    fn reset(&mut self, axis: AxisId) -> DragResult<()> {
        self.coordinator.reset(axis, &mut self.axes)?;
        Ok(())
    }
}

fn set_body_cursor(cursor: &str) {
    if let Some(body) = gloo::utils::document().body() {
        let _ = body.style().set_property("cursor", cursor);
    }
}

/// Run `f` on the binding unless another handler already holds it.
fn with_binding(binding: &Rc<RefCell<ChartBinding>>, f: impl FnOnce(&mut ChartBinding) -> DragResult<()>) {
    let Ok(mut binding) = binding.try_borrow_mut() else {
        return;
    };
    if let Err(err) = f(&mut binding) {
        log_warn!(COMPONENT, "{}", err);
    }
}

/// Drag-to-rescale behaviour attached to one chart.
///
/// Dropping (or calling `destroy`) removes every listener and overlay.
#[wasm_bindgen]
pub struct ScalableYAxes {
    id: u32,
    binding: Rc<RefCell<ChartBinding>>,
    // Drop order: listeners are removed before overlays are destroyed.
    #[allow(dead_code)]
    listeners: Vec<EventListenerHandle>,
    overlays: Vec<AxisOverlay>,
}

#[wasm_bindgen]
impl ScalableYAxes {
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.binding.borrow().coordinator.state().is_dragging()
    }

    #[wasm_bindgen(js_name = scalableAxisCount)]
    pub fn scalable_axis_count(&self) -> usize {
        self.overlays.len()
    }

    /// Reset every scalable axis to its data range.
    #[wasm_bindgen(js_name = resetAll)]
    pub fn reset_all(&self) -> Result<(), JsValue> {
        let mut binding = self.binding.borrow_mut();
        let ChartBinding { axes, coordinator, .. } = &mut *binding;
        let mut done: Vec<AxisId> = Vec::new();
        for axis in (0..axes.len()).map(AxisId) {
            if !done.contains(&axis) {
                done.extend(coordinator.reset(axis, axes)?);
            }
        }
        Ok(())
    }

    pub fn destroy(self) {}
}

impl ScalableYAxes {
    fn attach(chart: &JsValue, options: ScalableAxesOptions) -> DragResult<Self> {
        let chart = HighchartsChart::new(chart.clone())?;
        let axes = chart.y_axes()?;
        let layouts = axes.iter().map(HighchartsAxis::layout).collect::<DragResult<Vec<_>>>()?;
        let scale_options = axes.iter().map(HighchartsAxis::scale_options).collect::<DragResult<Vec<_>>>()?;

        let mut coordinator = AxisDragCoordinator::new(options);
        let regions = coordinator
            .setup(chart.container_size()?, layouts.iter().zip(scale_options.iter()))
            .to_vec();

        let container = chart.container()?;
        let binding = Rc::new(RefCell::new(ChartBinding { chart, axes, coordinator }));
        let mut listeners = Vec::new();
        let mut overlays = Vec::new();

        for (index, rect) in regions.iter().enumerate() {
            let Some(rect) = rect else { continue };
            let axis = AxisId(index);
            let overlay = binding.borrow().chart.render_overlay(*rect)?;
            binding.borrow().axes[index].mark_labels_resizable()?;

            let on_down = Rc::clone(&binding);
            listeners.push(event_listener(overlay.element(), ev::mousedown, move |event: MouseEvent| {
                with_binding(&on_down, |b| b.begin(axis, &event));
            }));
            let on_dblclick = Rc::clone(&binding);
            listeners.push(event_listener(overlay.element(), ev::dblclick, move |_event: MouseEvent| {
                with_binding(&on_dblclick, |b| b.reset(axis));
            }));
            overlays.push(overlay);
        }

        let on_move = Rc::clone(&binding);
        listeners.push(event_listener(&container, ev::mousemove, move |event: MouseEvent| {
            with_binding(&on_move, |b| b.drag(&event));
        }));
        let on_up = Rc::clone(&binding);
        listeners.push(event_listener(&gloo::utils::document(), ev::mouseup, move |_event: MouseEvent| {
            with_binding(&on_up, |b| {
                b.end();
                Ok(())
            });
        }));

        let id = NEXT_ID.with(|next| {
            let mut next = next.borrow_mut();
            *next += 1;
            *next
        });
        log_info!(COMPONENT, "attached #{} with {} scalable axes", id, overlays.len());
        Ok(Self { id, binding, listeners, overlays })
    }
}

fn parse_options(options: &JsValue) -> DragResult<ScalableAxesOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(ScalableAxesOptions::default());
    }
    let json = JSON::stringify(options)
        .map_err(|_| AxisDragError::InvalidOptions("options are not serializable".to_string()))?;
    ScalableAxesOptions::from_json(&String::from(json))
}

fn init_console_logger(options: &ScalableAxesOptions) {
    init_logger(Box::new(ConsoleLogger::new(options.log_level)));
}

/// Attach drag-to-rescale to an already rendered chart.
#[wasm_bindgen(js_name = attachScalableYAxes)]
pub fn attach_scalable_y_axes(chart: &JsValue, options: JsValue) -> Result<ScalableYAxes, JsValue> {
    let options = parse_options(&options)?;
    init_console_logger(&options);
    Ok(ScalableYAxes::attach(chart, options)?)
}

/// Attach to every chart the library builds from now on.
///
/// Hooks the chart `load` event; a chart's controller is dropped on its
/// `destroy` event. Calling this twice has no further effect.
#[wasm_bindgen(js_name = installScalableYAxes)]
pub fn install_scalable_y_axes(highcharts: &JsValue, options: JsValue) -> Result<(), JsValue> {
    let options = parse_options(&options)?;
    init_console_logger(&options);
    if LOAD_HOOK.with(|hook| hook.borrow().is_some()) {
        return Ok(());
    }

    let add_event: Function = Reflect::get(highcharts, &"addEvent".into())?.dyn_into()?;
    let chart_class = Reflect::get(highcharts, &"Chart".into())?;

    let hook_add_event = add_event.clone();
    let on_load = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let Ok(chart) = Reflect::get(&event, &"target".into()) else {
            return;
        };
        match ScalableYAxes::attach(&chart, options.clone()) {
            Ok(attached) => {
                let id = attached.id;
                ATTACHED.with(|list| list.borrow_mut().push(attached));
                let on_destroy = Closure::once_into_js(move |_event: JsValue| {
                    ATTACHED.with(|list| list.borrow_mut().retain(|entry| entry.id != id));
                });
                if let Err(err) = hook_add_event.call3(&JsValue::NULL, &chart, &"destroy".into(), &on_destroy) {
                    log_warn!(COMPONENT, "cannot watch chart destroy: {:?}", err);
                }
            }
            Err(err) => {
                log_error!(COMPONENT, "chart skipped: {}", err);
            }
        }
    });

    add_event.call3(&JsValue::NULL, &chart_class, &"load".into(), on_load.as_ref())?;
    LOAD_HOOK.with(|hook| *hook.borrow_mut() = Some(on_load));
    log_info!(COMPONENT, "installed chart load hook");
    Ok(())
}
