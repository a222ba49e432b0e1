use std::cell::RefCell;
use std::rc::Rc;

use scalable_yaxis::application::{AxisDragCoordinator, AxisScaleOptions, ScalableAxesOptions};
use scalable_yaxis::domain::axis::{
    Animation, AxisExtremes, AxisId, AxisLayout, AxisSide, ContainerSize, DataRange, DragPortion, Extremes,
    ScalableAxis, ScaleAxis,
};
use scalable_yaxis::domain::errors::{AxisDragError, DragResult};
use scalable_yaxis::domain::events::AxisDragEvent;

const CONTAINER: ContainerSize = ContainerSize { width: 600.0, height: 100.0 };

/// Axis spanning pixels 0..100, so pixel `p` maps to `max - p% of span`.
fn axis(side: AxisSide, data_min: f64, data_max: f64) -> ScaleAxis {
    let layout = AxisLayout { left: 80.0, right: 80.0, side, ..Default::default() };
    ScaleAxis::new(layout, 100.0, DataRange::new(data_min, data_max))
}

fn coordinator_for(axes: &[ScaleAxis], sync_axes: bool, scalable: &[bool]) -> AxisDragCoordinator {
    let options = ScalableAxesOptions { sync_axes, ..Default::default() };
    let mut coordinator = AxisDragCoordinator::new(options);
    let scale_options: Vec<AxisScaleOptions> =
        scalable.iter().map(|&scalable| AxisScaleOptions { scalable }).collect();
    coordinator.setup(CONTAINER, axes.iter().map(|a| &a.layout).zip(scale_options.iter()));
    coordinator
}

fn single_axis() -> (Vec<ScaleAxis>, AxisDragCoordinator) {
    let axes = vec![axis(AxisSide::Normal, 0.0, 100.0)];
    let coordinator = coordinator_for(&axes, false, &[true]);
    (axes, coordinator)
}

#[test]
fn upper_drag_moves_max_only() {
    let (mut axes, mut coordinator) = single_axis();

    let portion = coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    assert_eq!(portion, Some(DragPortion::Upper));

    let applied = coordinator.update_drag(40.0, &mut axes).unwrap();
    assert_eq!(applied, vec![(AxisId(0), Extremes::new(0.0, 120.0))]);
    assert_eq!(axes[0].current(), Extremes::new(0.0, 120.0));
}

#[test]
fn lower_drag_moves_min_only() {
    let (mut axes, mut coordinator) = single_axis();

    let portion = coordinator.begin_drag(AxisId(0), 80.0, &axes).unwrap();
    assert_eq!(portion, Some(DragPortion::Lower));

    coordinator.update_drag(90.0, &mut axes).unwrap();
    assert_eq!(axes[0].current(), Extremes::new(10.0, 100.0));
}

#[test]
fn repeated_pixel_applies_nothing() {
    let (mut axes, mut coordinator) = single_axis();
    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();

    coordinator.update_drag(40.0, &mut axes).unwrap();
    let redraws = axes[0].redraw_count();
    let second = coordinator.update_drag(40.0, &mut axes).unwrap();

    assert!(second.is_empty());
    assert_eq!(axes[0].redraw_count(), redraws);
    assert_eq!(axes[0].current(), Extremes::new(0.0, 120.0));
}

#[test]
fn moves_outside_a_session_are_ignored() {
    let (mut axes, mut coordinator) = single_axis();

    assert!(coordinator.update_drag(40.0, &mut axes).unwrap().is_empty());

    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    assert_eq!(coordinator.end_drag(), Some(AxisId(0)));
    assert!(coordinator.update_drag(60.0, &mut axes).unwrap().is_empty());
    assert!(!axes[0].has_user_extremes());
}

#[test]
fn end_drag_clears_session_of_any_axis() {
    let mut axes = vec![axis(AxisSide::Normal, 0.0, 100.0), axis(AxisSide::Opposite, 0.0, 10.0)];
    let mut coordinator = coordinator_for(&axes, false, &[true, true]);

    coordinator.begin_drag(AxisId(1), 10.0, &axes).unwrap();
    assert!(coordinator.state().is_dragging());
    assert_eq!(coordinator.end_drag(), Some(AxisId(1)));
    assert!(!coordinator.state().is_dragging());
    assert_eq!(coordinator.end_drag(), None);
    assert!(coordinator.update_drag(50.0, &mut axes).unwrap().is_empty());
}

#[test]
fn double_click_restores_data_range() {
    let (mut axes, mut coordinator) = single_axis();
    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    coordinator.update_drag(45.0, &mut axes).unwrap();
    coordinator.update_drag(70.0, &mut axes).unwrap();
    coordinator.end_drag();
    coordinator.begin_drag(AxisId(0), 95.0, &axes).unwrap();
    coordinator.update_drag(60.0, &mut axes).unwrap();

    let reset = coordinator.reset(AxisId(0), &mut axes).unwrap();

    assert_eq!(reset, vec![AxisId(0)]);
    assert_eq!(axes[0].current(), Extremes::new(0.0, 100.0));
    let extremes = axes[0].extremes().unwrap();
    assert_eq!(extremes.current, extremes.data.as_extremes());
}

#[test]
fn synced_axes_receive_identical_adjustment() {
    let mut axes = vec![axis(AxisSide::Normal, 0.0, 100.0), axis(AxisSide::Opposite, 0.0, 10.0)];
    let mut coordinator = coordinator_for(&axes, true, &[true, true]);

    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    let applied = coordinator.update_drag(40.0, &mut axes).unwrap();

    assert_eq!(applied.len(), 2);
    assert_eq!(axes[0].current(), Extremes::new(0.0, 120.0));
    assert_eq!(axes[1].current(), Extremes::new(0.0, 30.0));
}

#[test]
fn synced_reset_covers_every_scalable_axis() {
    let mut axes = vec![
        axis(AxisSide::Normal, 0.0, 100.0),
        axis(AxisSide::Opposite, 0.0, 10.0),
        axis(AxisSide::Opposite, -1.0, 1.0),
    ];
    let mut coordinator = coordinator_for(&axes, true, &[true, true, false]);
    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    coordinator.update_drag(40.0, &mut axes).unwrap();

    assert!(!axes[2].has_user_extremes());

    let reset = coordinator.reset(AxisId(1), &mut axes).unwrap();
    assert_eq!(reset, vec![AxisId(0), AxisId(1)]);
    assert_eq!(axes[0].current(), Extremes::new(0.0, 100.0));
    assert_eq!(axes[1].current(), Extremes::new(0.0, 10.0));
}

#[test]
fn unsynced_drag_leaves_other_axes_alone() {
    let mut axes = vec![axis(AxisSide::Normal, 0.0, 100.0), axis(AxisSide::Opposite, 0.0, 10.0)];
    let mut coordinator = coordinator_for(&axes, false, &[true, true]);

    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    coordinator.update_drag(40.0, &mut axes).unwrap();

    assert_eq!(axes[1].current(), Extremes::new(0.0, 10.0));
    assert!(!axes[1].has_user_extremes());
}

#[test]
fn non_scalable_axis_does_not_start_a_drag() {
    let axes = vec![axis(AxisSide::Normal, 0.0, 100.0)];
    let mut coordinator = coordinator_for(&axes, true, &[false]);

    assert_eq!(coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap(), None);
    assert!(!coordinator.state().is_dragging());
}

#[test]
fn unknown_axis_is_reported() {
    let (mut axes, mut coordinator) = single_axis();
    assert_eq!(
        coordinator.begin_drag(AxisId(3), 20.0, &axes),
        Err(AxisDragError::UnknownAxis(AxisId(3)))
    );
    assert_eq!(
        coordinator.reset(AxisId(3), &mut axes),
        Err(AxisDragError::UnknownAxis(AxisId(3)))
    );
}

#[test]
fn zero_width_range_ignores_moves() {
    let mut axes = vec![axis(AxisSide::Normal, 5.0, 5.0)];
    let mut coordinator = coordinator_for(&axes, false, &[true]);

    coordinator.begin_drag(AxisId(0), 50.0, &axes).unwrap();
    let applied = coordinator.update_drag(10.0, &mut axes).unwrap();

    assert!(applied.is_empty());
    assert!(coordinator.state().is_dragging());
    assert!(!axes[0].has_user_extremes());
}

#[test]
fn degenerate_data_range_drags_a_zoomed_axis() {
    let mut axes = vec![axis(AxisSide::Normal, 5.0, 5.0)];
    axes[0].set_extremes(Extremes::new(0.0, 10.0), false, Animation::Disabled).unwrap();
    let mut coordinator = coordinator_for(&axes, false, &[true]);

    let portion = coordinator.begin_drag(AxisId(0), 50.0, &axes).unwrap();
    assert_eq!(portion, Some(DragPortion::Lower));

    let applied = coordinator.update_drag(10.0, &mut axes).unwrap();
    assert_eq!(applied, vec![(AxisId(0), Extremes::new(-4.0, 10.0))]);
}

#[test]
fn double_click_mid_drag_restores_data_range() {
    let (mut axes, mut coordinator) = single_axis();
    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    coordinator.update_drag(40.0, &mut axes).unwrap();
    assert!(coordinator.state().is_dragging());

    coordinator.reset(AxisId(0), &mut axes).unwrap();

    assert_eq!(axes[0].current(), Extremes::new(0.0, 100.0));
    assert!(coordinator.state().is_dragging());
}

/// Host axis that refuses new extremes when `reject` is set.
struct FlakyAxis {
    inner: ScaleAxis,
    reject: bool,
}

impl ScalableAxis for FlakyAxis {
    fn to_value(&self, pixel: f64) -> DragResult<f64> {
        self.inner.to_value(pixel)
    }

    fn extremes(&self) -> DragResult<AxisExtremes> {
        self.inner.extremes()
    }

    fn set_extremes(&mut self, extremes: Extremes, redraw: bool, animation: Animation) -> DragResult<()> {
        if self.reject {
            return Err(AxisDragError::HostApi("setExtremes failed".to_string()));
        }
        self.inner.set_extremes(extremes, redraw, animation)
    }
}

#[test]
fn rejected_sync_target_does_not_replay_the_step() {
    let mut axes = vec![
        FlakyAxis { inner: axis(AxisSide::Normal, 0.0, 100.0), reject: false },
        FlakyAxis { inner: axis(AxisSide::Opposite, 0.0, 100.0), reject: true },
    ];
    let mut coordinator = AxisDragCoordinator::new(ScalableAxesOptions { sync_axes: true, ..Default::default() });
    let scale_options = [AxisScaleOptions::default(); 2];
    coordinator.setup(CONTAINER, axes.iter().map(|a| &a.inner.layout).zip(scale_options.iter()));

    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    let first = coordinator.update_drag(40.0, &mut axes);
    assert!(matches!(first, Err(AxisDragError::HostApi(_))));
    assert_eq!(axes[0].inner.current(), Extremes::new(0.0, 120.0));

    let repeated = coordinator.update_drag(40.0, &mut axes).unwrap();
    assert!(repeated.is_empty());
    assert_eq!(axes[0].inner.current(), Extremes::new(0.0, 120.0));
    assert!(!axes[1].inner.has_user_extremes());

    axes[1].reject = false;
    let next = coordinator.update_drag(50.0, &mut axes).unwrap();
    assert_eq!(next.len(), 2);
    assert_eq!(axes[0].inner.current(), Extremes::new(0.0, 132.0));
    assert_eq!(axes[1].inner.current(), Extremes::new(0.0, 112.0));
}

#[test]
fn events_follow_the_drag_lifecycle() {
    let (mut axes, mut coordinator) = single_axis();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    coordinator.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    coordinator.begin_drag(AxisId(0), 20.0, &axes).unwrap();
    coordinator.update_drag(40.0, &mut axes).unwrap();
    coordinator.end_drag();
    coordinator.reset(AxisId(0), &mut axes).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            AxisDragEvent::DragStarted { axis: AxisId(0), portion: DragPortion::Upper, anchor_value: 80.0 },
            AxisDragEvent::ExtremesChanged {
                axis: AxisId(0),
                old: Extremes::new(0.0, 100.0),
                new: Extremes::new(0.0, 120.0),
            },
            AxisDragEvent::DragEnded { axis: AxisId(0) },
            AxisDragEvent::AxisReset { axis: AxisId(0), extremes: Extremes::new(0.0, 100.0) },
        ]
    );
}
