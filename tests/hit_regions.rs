use scalable_yaxis::application::{AxisDragCoordinator, AxisScaleOptions};
use scalable_yaxis::domain::axis::{AxisId, AxisLayout, AxisSide, ContainerSize, HitRegionLayout, LabelAlign};

const CONTAINER: ContainerSize = ContainerSize { width: 800.0, height: 400.0 };

fn layout(side: AxisSide, label_align: LabelAlign) -> AxisLayout {
    AxisLayout { left: 100.0, right: 100.0, top: 10.0, bottom: 40.0, side, label_align }
}

fn five_axes() -> Vec<(AxisLayout, bool)> {
    vec![
        (layout(AxisSide::Normal, LabelAlign::Right), true),
        (layout(AxisSide::Normal, LabelAlign::Center), true),
        (layout(AxisSide::Opposite, LabelAlign::Center), true),
        (layout(AxisSide::Opposite, LabelAlign::Left), false),
        (layout(AxisSide::Opposite, LabelAlign::Left), true),
    ]
}

#[test]
fn same_side_axes_are_stacked_outward() {
    let axes = five_axes();
    let rects = HitRegionLayout::compute(CONTAINER, 60.0, axes.iter().map(|(l, s)| (l, *s)));

    insta::assert_debug_snapshot!(rects, @r###"
    [
        Some(
            HitRect {
                x: 40.0,
                y: 10.0,
                width: 60.0,
                height: 350.0,
            },
        ),
        Some(
            HitRect {
                x: -20.0,
                y: 10.0,
                width: 60.0,
                height: 350.0,
            },
        ),
        Some(
            HitRect {
                x: 640.0,
                y: 10.0,
                width: 60.0,
                height: 350.0,
            },
        ),
        None,
        Some(
            HitRect {
                x: 760.0,
                y: 10.0,
                width: 60.0,
                height: 350.0,
            },
        ),
    ]
    "###);
}

#[test]
fn hit_test_finds_owning_axis() {
    let axes = five_axes();
    let scale_options: Vec<AxisScaleOptions> =
        axes.iter().map(|(_, scalable)| AxisScaleOptions { scalable: *scalable }).collect();
    let mut coordinator = AxisDragCoordinator::default();
    coordinator.setup(CONTAINER, axes.iter().map(|(l, _)| l).zip(scale_options.iter()));

    assert_eq!(coordinator.hit_test(70.0, 200.0), Some(AxisId(0)));
    assert_eq!(coordinator.hit_test(0.0, 200.0), Some(AxisId(1)));
    assert_eq!(coordinator.hit_test(650.0, 200.0), Some(AxisId(2)));
    assert_eq!(coordinator.hit_test(780.0, 200.0), Some(AxisId(4)));
    assert_eq!(coordinator.hit_test(400.0, 200.0), None);
    assert_eq!(coordinator.hit_test(70.0, 5.0), None);
    assert!(!coordinator.is_scalable(AxisId(3)));
}

#[test]
fn setup_is_repeatable_on_chart_rebuild() {
    let axes = five_axes();
    let scale_options = vec![AxisScaleOptions::default(); axes.len()];
    let mut coordinator = AxisDragCoordinator::default();

    let first = coordinator
        .setup(CONTAINER, axes.iter().map(|(l, _)| l).zip(scale_options.iter()))
        .to_vec();
    let second = coordinator
        .setup(CONTAINER, axes.iter().map(|(l, _)| l).zip(scale_options.iter()))
        .to_vec();

    assert_eq!(first, second);
    assert_eq!(coordinator.hit_regions().iter().flatten().count(), 5);
}
