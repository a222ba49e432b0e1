//! Drag state machine: `Idle -> Dragging -> Idle`.
//!
//! Moves are incremental: each pointer move is measured against the pixel of
//! the previous move, so repeating a pixel yields a zero step and nothing is
//! applied. Bounds are not clamped to the data range, but the moving bound
//! never crosses the fixed one.

use std::mem;

use crate::domain::axis::{AxisId, DataRange, DragPortion, Extremes};

/// Smallest span the moving bound may leave, relative to the data span
pub const MIN_SPAN_RATIO: f64 = 1e-6;

/// Transient state of one pointer drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub owner: AxisId,
    pub anchor_pixel: f64,
    pub anchor_value: f64,
    pub portion: DragPortion,
    pub last_pixel: f64,
}

impl DragSession {
    pub fn start(owner: AxisId, anchor_pixel: f64, anchor_value: f64, data: &DataRange) -> Self {
        Self {
            owner,
            anchor_pixel,
            anchor_value,
            portion: DragPortion::classify(anchor_value, data),
            last_pixel: anchor_pixel,
        }
    }

    /// Move one bound of `current` by `-step`.
    ///
    /// Returns `None` when nothing would change.
    pub fn adjust(&self, current: Extremes, step: f64, data: &DataRange) -> Option<Extremes> {
        if step == 0.0 || !step.is_finite() {
            return None;
        }
        let min_span = minimum_span(data, current);
        let next = match self.portion {
            DragPortion::Upper => {
                let max = (current.max - step).max(current.min + min_span);
                Extremes::new(current.min, max)
            }
            DragPortion::Lower => {
                let min = (current.min - step).min(current.max - min_span);
                Extremes::new(min, current.max)
            }
        };
        (next != current).then_some(next)
    }
}

/// Smallest allowed distance between the two bounds.
pub fn minimum_span(data: &DataRange, current: Extremes) -> f64 {
    let span = data.span().abs();
    if span > 0.0 {
        span * MIN_SPAN_RATIO
    } else {
        f64::EPSILON * current.min.abs().max(current.max.abs()).max(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    /// Enter `Dragging`, replacing any session left over from a lost pointer-up.
    pub fn begin(&mut self, session: DragSession) -> Option<DragSession> {
        match mem::replace(self, DragState::Dragging(session)) {
            DragState::Dragging(previous) => Some(previous),
            DragState::Idle => None,
        }
    }

    /// Back to `Idle`; returns the session that was active, if any.
    pub fn end(&mut self) -> Option<DragSession> {
        match mem::take(self) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}
