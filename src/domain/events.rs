use crate::domain::axis::{AxisId, DragPortion, Extremes};

/// Events emitted while an axis is dragged or reset
#[derive(Debug, Clone, PartialEq)]
pub enum AxisDragEvent {
    DragStarted {
        axis: AxisId,
        portion: DragPortion,
        anchor_value: f64,
    },
    ExtremesChanged {
        axis: AxisId,
        old: Extremes,
        new: Extremes,
    },
    DragEnded {
        axis: AxisId,
    },
    AxisReset {
        axis: AxisId,
        extremes: Extremes,
    },
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: AxisDragEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: Vec<Box<dyn Fn(&AxisDragEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&AxisDragEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: AxisDragEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }
}
