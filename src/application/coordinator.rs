use crate::application::options::{AxisScaleOptions, ScalableAxesOptions};
use crate::domain::{
    axis::{AxisId, AxisLayout, ContainerSize, DragPortion, Extremes, HitRect, HitRegionLayout, ScalableAxis},
    drag::{DragSession, DragState},
    errors::{AxisDragError, DragResult},
    events::{AxisDragEvent, EventDispatcher, InMemoryEventDispatcher},
    logging::{LogComponent, LogLevel, Logger, get_logger},
};
use crate::{log_debug, log_trace, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("AxisDrag");

/// Owns the drag session and the hit regions of every axis of one chart.
///
/// Axes stay owned by the host and are lent to each call, so the coordinator
/// never holds a reference into the chart between events.
pub struct AxisDragCoordinator {
    options: ScalableAxesOptions,
    regions: Vec<Option<HitRect>>,
    state: DragState,
    dispatcher: InMemoryEventDispatcher,
}

impl AxisDragCoordinator {
    pub fn new(options: ScalableAxesOptions) -> Self {
        Self {
            options,
            regions: Vec::new(),
            state: DragState::Idle,
            dispatcher: InMemoryEventDispatcher::new(),
        }
    }

    pub fn options(&self) -> &ScalableAxesOptions {
        &self.options
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&AxisDragEvent) + 'static,
    {
        self.dispatcher.subscribe(handler);
    }

    /// (Re)compute hit regions; run whenever the host chart is (re)built.
    pub fn setup<'a, I>(&mut self, container: ContainerSize, axes: I) -> &[Option<HitRect>]
    where
        I: IntoIterator<Item = (&'a AxisLayout, &'a AxisScaleOptions)>,
    {
        self.state = DragState::Idle;
        self.regions = HitRegionLayout::compute(
            container,
            self.options.hit_region_width,
            axes.into_iter().map(|(layout, options)| (layout, options.scalable)),
        );
        log_debug!(
            COMPONENT,
            "setup: {} of {} axes scalable",
            self.regions.iter().flatten().count(),
            self.regions.len()
        );
        &self.regions
    }

    pub fn hit_regions(&self) -> &[Option<HitRect>] {
        &self.regions
    }

    pub fn hit_region(&self, axis: AxisId) -> Option<HitRect> {
        self.regions.get(axis.index()).copied().flatten()
    }

    pub fn is_scalable(&self, axis: AxisId) -> bool {
        self.hit_region(axis).is_some()
    }

    /// First axis whose grab rectangle contains the chart-space point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<AxisId> {
        self.regions
            .iter()
            .position(|region| region.is_some_and(|rect| rect.contains(x, y)))
            .map(AxisId)
    }

    /// Pointer-down on an axis' grab rectangle.
    ///
    /// Returns the classified portion, or `None` when the axis is not scalable.
    pub fn begin_drag<A: ScalableAxis>(
        &mut self,
        axis: AxisId,
        pixel: f64,
        axes: &[A],
    ) -> DragResult<Option<DragPortion>> {
        let host = axes.get(axis.index()).ok_or(AxisDragError::UnknownAxis(axis))?;
        if !self.is_scalable(axis) {
            return Ok(None);
        }

        let anchor_value = host.to_value(pixel)?;
        let data = host.extremes()?.data;
        let session = DragSession::start(axis, pixel, anchor_value, &data);
        if let Some(previous) = self.state.begin(session) {
            log_debug!(COMPONENT, "replacing stale session on {}", previous.owner);
        }

        log_debug!(
            COMPONENT,
            "drag start on {} at {:.2} ({} portion)",
            axis,
            anchor_value,
            session.portion
        );
        self.dispatcher.publish(AxisDragEvent::DragStarted {
            axis,
            portion: session.portion,
            anchor_value,
        });
        Ok(Some(session.portion))
    }

    /// Pointer-move anywhere over the chart. A no-op unless a drag is active.
    ///
    /// Returns the extremes applied per axis; empty when nothing changed.
    pub fn update_drag<A: ScalableAxis>(
        &mut self,
        pixel: f64,
        axes: &mut [A],
    ) -> DragResult<Vec<(AxisId, Extremes)>> {
        let Some(session) = self.state.session().copied() else {
            return Ok(Vec::new());
        };
        let owner = axes
            .get(session.owner.index())
            .ok_or(AxisDragError::UnknownAxis(session.owner))?;

        let step = owner.to_value(pixel)? - owner.to_value(session.last_pixel)?;
        if step == 0.0 {
            log_trace!(COMPONENT, "zero step at pixel {:.1}, skipping", pixel);
            return Ok(Vec::new());
        }

        // The step is consumed even if some axis rejects it.
        if let Some(active) = self.state.session_mut() {
            active.last_pixel = pixel;
        }

        let mut applied = Vec::new();
        let mut first_error = None;
        for id in self.targets(session.owner, axes.len()) {
            match self.apply_step(&session, id, step, &mut axes[id.index()]) {
                Ok(Some(next)) => applied.push((id, next)),
                Ok(None) => {}
                Err(err) => {
                    log_warn!(COMPONENT, "{} rejected new extremes: {}", id, err);
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(applied),
        }
    }

    fn apply_step<A: ScalableAxis>(
        &self,
        session: &DragSession,
        id: AxisId,
        step: f64,
        axis: &mut A,
    ) -> DragResult<Option<Extremes>> {
        let extremes = axis.extremes()?;
        let Some(next) = session.adjust(extremes.current, step, &extremes.data) else {
            return Ok(None);
        };
        axis.set_extremes(next, true, self.options.animation)?;
        if let Ok(pair) = serde_json::to_string(&next) {
            Logger::log_with_metadata(
                get_logger(),
                LogLevel::Trace,
                COMPONENT,
                &format!("{} extremes from {}", id, extremes.current),
                &pair,
            );
        }
        self.dispatcher.publish(AxisDragEvent::ExtremesChanged {
            axis: id,
            old: extremes.current,
            new: next,
        });
        Ok(Some(next))
    }

    /// Global pointer-up. Ends the session whichever axis started it.
    pub fn end_drag(&mut self) -> Option<AxisId> {
        let session = self.state.end()?;
        log_debug!(COMPONENT, "drag end on {}", session.owner);
        self.dispatcher.publish(AxisDragEvent::DragEnded { axis: session.owner });
        Some(session.owner)
    }

    /// Double-click: back to the data range. Returns the axes that were reset.
    pub fn reset<A: ScalableAxis>(&mut self, axis: AxisId, axes: &mut [A]) -> DragResult<Vec<AxisId>> {
        if axis.index() >= axes.len() {
            return Err(AxisDragError::UnknownAxis(axis));
        }
        if !self.is_scalable(axis) {
            return Ok(Vec::new());
        }

        let targets = self.targets(axis, axes.len());
        for &id in &targets {
            let host = &mut axes[id.index()];
            host.reset_extremes(true)?;
            let extremes = host.extremes()?.current;
            self.dispatcher.publish(AxisDragEvent::AxisReset { axis: id, extremes });
        }
        log_debug!(COMPONENT, "reset {} axes from {}", targets.len(), axis);
        Ok(targets)
    }

    /// Axes touched by an operation started on `owner`.
    fn targets(&self, owner: AxisId, axis_count: usize) -> Vec<AxisId> {
        if !self.options.sync_axes {
            return vec![owner];
        }
        (0..axis_count).map(AxisId).filter(|&id| self.is_scalable(id)).collect()
    }
}

impl Default for AxisDragCoordinator {
    fn default() -> Self {
        Self::new(ScalableAxesOptions::default())
    }
}
