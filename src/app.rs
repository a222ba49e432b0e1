use leptos::html::Div;
use leptos::*;

use crate::{
    application::{AxisDragCoordinator, AxisScaleOptions},
    domain::{
        axis::{AxisId, AxisLayout, AxisSide, ContainerSize, DataRange, HitRect, ScaleAxis},
        events::AxisDragEvent,
        logging::LogComponent,
    },
    event_utils::event_listener,
    log_warn,
};

const DEMO_WIDTH: f64 = 720.0;
const DEMO_HEIGHT: f64 = 400.0;
const TICK_COUNT: usize = 5;
const EVENT_LOG_LIMIT: usize = 50;

fn demo_axes() -> Vec<ScaleAxis> {
    let left = AxisLayout { left: 80.0, top: 20.0, bottom: 40.0, ..Default::default() };
    let right = AxisLayout { right: 80.0, top: 20.0, bottom: 40.0, side: AxisSide::Opposite, ..Default::default() };
    let length = left.height(DEMO_HEIGHT);
    vec![
        ScaleAxis::new(left, length, DataRange::new(0.0, 100.0)),
        ScaleAxis::new(right, length, DataRange::new(-5.0, 5.0)),
    ]
}

fn describe(event: &AxisDragEvent) -> String {
    match event {
        AxisDragEvent::DragStarted { axis, portion, anchor_value } => {
            format!("{} drag {} from {:.2}", axis, portion, anchor_value)
        }
        AxisDragEvent::ExtremesChanged { axis, new, .. } => format!("{} -> {}", axis, new),
        AxisDragEvent::DragEnded { axis } => format!("{} released", axis),
        AxisDragEvent::AxisReset { axis, extremes } => format!("{} reset to {}", axis, extremes),
    }
}

/// Evenly spaced label values between the current extremes
fn tick_values(axis: &ScaleAxis) -> Vec<f64> {
    let extremes = axis.current();
    let step = extremes.span() / (TICK_COUNT - 1) as f64;
    (0..TICK_COUNT).map(|i| extremes.min + step * i as f64).collect()
}

fn axis_view(axis: &ScaleAxis, region: Option<HitRect>) -> impl IntoView {
    let label_x = region.map(|rect| rect.x + 8.0).unwrap_or(axis.layout.left);
    let labels = tick_values(axis)
        .into_iter()
        .map(|value| {
            let style = format!(
                "position: absolute; left: {}px; top: {}px; transform: translateY(-50%); font-size: 11px;",
                label_x,
                axis.to_pixel(value)
            );
            view! { <span class="tick" style=style>{format!("{:.1}", value)}</span> }
        })
        .collect_view();

    let overlay = region.map(|rect| {
        let style = format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; cursor: ns-resize; background: #fff; opacity: 0;",
            rect.x, rect.y, rect.width, rect.height
        );
        view! { <div class="hit-region" style=style></div> }
    });

    view! { <div class="axis">{labels}{overlay}</div> }
}

/// Two-axis playground driving the drag coordinator with in-memory axes.
#[component]
pub fn AxisDragDemo() -> impl IntoView {
    let axes = create_rw_signal(demo_axes());
    let events = create_rw_signal(Vec::<String>::new());
    let surface = create_node_ref::<Div>();

    let coordinator = store_value({
        let mut coordinator = AxisDragCoordinator::default();
        coordinator.subscribe(move |event| {
            events.update(|log| {
                log.push(describe(event));
                if log.len() > EVENT_LOG_LIMIT {
                    log.remove(0);
                }
            });
        });
        let scale_options = [AxisScaleOptions::default(); 2];
        axes.with_untracked(|axes| {
            coordinator.setup(
                ContainerSize::new(DEMO_WIDTH, DEMO_HEIGHT),
                axes.iter().map(|axis| &axis.layout).zip(scale_options.iter()),
            );
        });
        coordinator
    });

    let chart_point = move |event: &web_sys::MouseEvent| -> Option<(f64, f64)> {
        let rect = surface.get_untracked()?.get_bounding_client_rect();
        Some((event.client_x() as f64 - rect.left(), event.client_y() as f64 - rect.top()))
    };

    let on_down = move |event: web_sys::MouseEvent| {
        let Some((x, y)) = chart_point(&event) else { return };
        let Some(axis) = coordinator.with_value(|c| c.hit_test(x, y)) else { return };
        event.prevent_default();
        axes.with_untracked(|axes| {
            coordinator.update_value(|c| {
                if let Err(err) = c.begin_drag(axis, y, axes) {
                    log_warn!(LogComponent::Presentation("Demo"), "{}", err);
                }
            });
        });
    };

    let on_move = move |event: web_sys::MouseEvent| {
        if !coordinator.with_value(|c| c.state().is_dragging()) {
            return;
        }
        let Some((_, y)) = chart_point(&event) else { return };
        axes.update(|axes| {
            coordinator.update_value(|c| {
                if let Err(err) = c.update_drag(y, axes) {
                    log_warn!(LogComponent::Presentation("Demo"), "{}", err);
                }
            });
        });
    };

    let on_dblclick = move |event: web_sys::MouseEvent| {
        let Some((x, y)) = chart_point(&event) else { return };
        let Some(axis) = coordinator.with_value(|c| c.hit_test(x, y)) else { return };
        axes.update(|axes| {
            coordinator.update_value(|c| {
                if let Err(err) = c.reset(axis, axes) {
                    log_warn!(LogComponent::Presentation("Demo"), "{}", err);
                }
            });
        });
    };

    let mouseup = event_listener(&gloo::utils::document(), ev::mouseup, move |_event: web_sys::MouseEvent| {
        coordinator.update_value(|c| {
            c.end_drag();
        });
    });
    on_cleanup(move || drop(mouseup));

    view! {
        <div class="axis-drag-demo">
            <div
                node_ref=surface
                class="drag-surface"
                style=format!("position: relative; width: {}px; height: {}px; border: 1px solid #4a5d73;", DEMO_WIDTH, DEMO_HEIGHT)
                on:mousedown=on_down
                on:mousemove=on_move
                on:dblclick=on_dblclick
            >
                {move || {
                    axes.with(|axes| {
                        axes.iter()
                            .enumerate()
                            .map(|(index, axis)| {
                                let region = coordinator.with_value(|c| c.hit_region(AxisId(index)));
                                axis_view(axis, region)
                            })
                            .collect_view()
                    })
                }}
            </div>
            <ul class="event-log">
                {move || events.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// Mount the demo into `<body>`.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountAxisDragDemo)]
pub fn mount_axis_drag_demo() {
    mount_to_body(|| view! { <AxisDragDemo/> });
}
