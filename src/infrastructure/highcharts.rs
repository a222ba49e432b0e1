//! Adapter over the Highcharts object model.
//!
//! Only the handful of members the drag controller needs are touched:
//! `yAxis[]`, `pointer.normalize`, `renderer.rect`, `container`, and the axis'
//! `toValue` / `getExtremes` / `setExtremes`.

use std::str::FromStr;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, MouseEvent};

use crate::application::AxisScaleOptions;
use crate::domain::{
    axis::{Animation, AxisExtremes, AxisLayout, AxisSide, ContainerSize, DataRange, Extremes, HitRect, LabelAlign, ScalableAxis},
    errors::{AxisDragError, DragResult},
    logging::LogComponent,
};
use crate::log_trace;

pub const RESIZE_CURSOR: &str = "ns-resize";
const OVERLAY_Z_INDEX: f64 = 8.0;

fn host_error(context: &str, err: JsValue) -> AxisDragError {
    let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    AxisDragError::HostApi(format!("{}: {}", context, detail))
}

fn get(target: &JsValue, key: &str) -> DragResult<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|e| host_error(key, e))
}

fn get_f64(target: &JsValue, key: &str) -> DragResult<f64> {
    get(target, key)?
        .as_f64()
        .ok_or_else(|| AxisDragError::HostApi(format!("`{}` is not a number", key)))
}

fn get_opt_f64(target: &JsValue, key: &str) -> DragResult<Option<f64>> {
    Ok(get(target, key)?.as_f64())
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> DragResult<JsValue> {
    let function: Function = get(target, method)?
        .dyn_into()
        .map_err(|_| AxisDragError::HostApi(format!("`{}` is not a function", method)))?;
    let args: Array = args.iter().collect();
    function.apply(target, &args).map_err(|e| host_error(method, e))
}

fn object(entries: &[(&str, JsValue)]) -> DragResult<Object> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value).map_err(|e| host_error(key, e))?;
    }
    Ok(object)
}

fn animation_to_js(animation: Animation) -> DragResult<JsValue> {
    Ok(match animation {
        Animation::Disabled => JsValue::FALSE,
        Animation::Enabled => JsValue::TRUE,
        Animation::Duration(ms) => object(&[("duration", JsValue::from_f64(ms as f64))])?.into(),
    })
}

/// One `chart.yAxis[i]` object
#[derive(Debug, Clone)]
pub struct HighchartsAxis {
    axis: JsValue,
}

impl HighchartsAxis {
    pub fn new(axis: JsValue) -> Self {
        Self { axis }
    }

    fn options(&self) -> DragResult<JsValue> {
        get(&self.axis, "options")
    }

    /// `options.scalable`, `true` when absent.
    pub fn scale_options(&self) -> DragResult<AxisScaleOptions> {
        let scalable = get(&self.options()?, "scalable")?.as_bool();
        Ok(AxisScaleOptions { scalable: scalable.unwrap_or(true) })
    }

    pub fn layout(&self) -> DragResult<AxisLayout> {
        let labels = get(&self.options()?, "labels")?;
        let label_align = if labels.is_object() {
            get(&labels, "align")?
                .as_string()
                .and_then(|align| LabelAlign::from_str(&align).ok())
                .unwrap_or_default()
        } else {
            LabelAlign::default()
        };

        Ok(AxisLayout {
            left: get_f64(&self.axis, "left")?,
            right: get_f64(&self.axis, "right")?,
            top: get_f64(&self.axis, "top")?,
            bottom: get_f64(&self.axis, "bottom")?,
            side: AxisSide::from(get(&self.axis, "opposite")?.is_truthy()),
            label_align,
        })
    }

    /// Show the resize cursor over the axis labels too.
    pub fn mark_labels_resizable(&self) -> DragResult<()> {
        let labels = get(&self.options()?, "labels")?;
        if !labels.is_object() {
            return Ok(());
        }
        let mut style = get(&labels, "style")?;
        if !style.is_object() {
            style = Object::new().into();
            Reflect::set(&labels, &"style".into(), &style).map_err(|e| host_error("labels.style", e))?;
        }
        Reflect::set(&style, &"cursor".into(), &RESIZE_CURSOR.into()).map_err(|e| host_error("cursor", e))?;
        Ok(())
    }
}

impl ScalableAxis for HighchartsAxis {
    fn to_value(&self, pixel: f64) -> DragResult<f64> {
        call(&self.axis, "toValue", &[JsValue::from_f64(pixel)])?
            .as_f64()
            .ok_or_else(|| AxisDragError::HostApi("toValue returned a non-number".to_string()))
    }

    fn extremes(&self) -> DragResult<AxisExtremes> {
        let extremes = call(&self.axis, "getExtremes", &[])?;
        let data = DataRange::new(get_f64(&extremes, "dataMin")?, get_f64(&extremes, "dataMax")?);
        Ok(AxisExtremes::resolve(
            get_opt_f64(&extremes, "userMin")?,
            get_opt_f64(&extremes, "userMax")?,
            data,
        ))
    }

    fn set_extremes(&mut self, extremes: Extremes, redraw: bool, animation: Animation) -> DragResult<()> {
        call(
            &self.axis,
            "setExtremes",
            &[
                JsValue::from_f64(extremes.min),
                JsValue::from_f64(extremes.max),
                JsValue::from_bool(redraw),
                animation_to_js(animation)?,
            ],
        )?;
        Ok(())
    }
}

/// Invisible grab rectangle drawn by the chart's SVG renderer
pub struct AxisOverlay {
    wrapper: JsValue,
    element: EventTarget,
}

impl AxisOverlay {
    pub fn element(&self) -> &EventTarget {
        &self.element
    }
}

impl Drop for AxisOverlay {
    fn drop(&mut self) {
        // Already gone when the chart itself was destroyed first.
        let _ = call(&self.wrapper, "destroy", &[]);
    }
}

/// A Highcharts `Chart` instance
#[derive(Debug, Clone)]
pub struct HighchartsChart {
    chart: JsValue,
}

impl HighchartsChart {
    pub fn new(chart: JsValue) -> DragResult<Self> {
        if !chart.is_object() {
            return Err(AxisDragError::HostApi("chart is not an object".to_string()));
        }
        Ok(Self { chart })
    }

    pub fn y_axes(&self) -> DragResult<Vec<HighchartsAxis>> {
        let axes: Array = get(&self.chart, "yAxis")?
            .dyn_into()
            .map_err(|_| AxisDragError::HostApi("`yAxis` is not an array".to_string()))?;
        Ok(axes.iter().map(HighchartsAxis::new).collect())
    }

    /// `containerWidth/Height` on older hosts, `chartWidth/Height` otherwise.
    pub fn container_size(&self) -> DragResult<ContainerSize> {
        let width = match get_opt_f64(&self.chart, "containerWidth")? {
            Some(width) => width,
            None => get_f64(&self.chart, "chartWidth")?,
        };
        let height = match get_opt_f64(&self.chart, "containerHeight")? {
            Some(height) => height,
            None => get_f64(&self.chart, "chartHeight")?,
        };
        Ok(ContainerSize::new(width, height))
    }

    pub fn container(&self) -> DragResult<EventTarget> {
        get(&self.chart, "container")?
            .dyn_into()
            .map_err(|_| AxisDragError::HostApi("`container` is not a DOM element".to_string()))
    }

    /// Vertical pointer position in chart coordinates.
    pub fn chart_y(&self, event: &MouseEvent) -> DragResult<f64> {
        let pointer = get(&self.chart, "pointer")?;
        let normalized = call(&pointer, "normalize", &[event.clone().into()])?;
        get_f64(&normalized, "chartY")
    }

    pub fn render_overlay(&self, rect: HitRect) -> DragResult<AxisOverlay> {
        let renderer = get(&self.chart, "renderer")?;
        let wrapper = call(
            &renderer,
            "rect",
            &[
                JsValue::from_f64(rect.x),
                JsValue::from_f64(rect.y),
                JsValue::from_f64(rect.width),
                JsValue::from_f64(rect.height),
            ],
        )?;
        let attrs = object(&[
            ("fill", "#fff".into()),
            ("opacity", JsValue::from_f64(0.0)),
            ("zIndex", JsValue::from_f64(OVERLAY_Z_INDEX)),
        ])?;
        call(&wrapper, "attr", &[attrs.into()])?;
        let css = object(&[("cursor", RESIZE_CURSOR.into())])?;
        call(&wrapper, "css", &[css.into()])?;
        call(&wrapper, "add", &[])?;

        let element = get(&wrapper, "element")?
            .dyn_into()
            .map_err(|_| AxisDragError::HostApi("overlay has no DOM element".to_string()))?;
        log_trace!(
            LogComponent::Infrastructure("Highcharts"),
            "overlay at ({:.0}, {:.0}) {}x{}",
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        Ok(AxisOverlay { wrapper, element })
    }
}
