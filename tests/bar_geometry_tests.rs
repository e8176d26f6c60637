use approx::assert_relative_eq;
use histogram_rs::core::{
    BarGeometry, Bin, DataPoint, DataPointAccessor, TimeDomain, TimeScale, bin_with_thresholds,
    max_bin_value, value_scale_for_bins,
};

const HEIGHT_FOR_BARS: f64 = 102.0;

fn example_bins() -> Vec<Bin> {
    let data = vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(500.0, 2.0),
        DataPoint::new(999.0, 3.0),
    ];
    bin_with_thresholds(&data, &DataPointAccessor, (0.0, 1000.0), &[500.0, 1000.0])
}

fn geometry(bins: &[Bin]) -> BarGeometry {
    let x_scale = TimeScale::new(TimeDomain::new(0.0, 1000.0), (10.0, 490.0));
    let y_scale = value_scale_for_bins(bins, HEIGHT_FOR_BARS, true);
    BarGeometry::new(x_scale, y_scale, HEIGHT_FOR_BARS, 1.0)
}

#[test]
fn bars_are_positioned_from_scales_and_margin() {
    let bins = example_bins();
    let geometry = geometry(&bins);
    let bars = geometry.project_bars(&bins);
    assert_eq!(bars.len(), 3);

    assert_relative_eq!(bars[0].x, 10.5);
    assert_relative_eq!(bars[0].width, 239.0);
    assert_relative_eq!(bars[0].y, 81.6, epsilon = 1e-9);
    assert_relative_eq!(bars[0].height, 20.4, epsilon = 1e-9);

    assert_relative_eq!(bars[1].x, 250.5);
    assert_relative_eq!(bars[1].y, 0.0);
    assert_relative_eq!(bars[1].height, HEIGHT_FOR_BARS);
}

#[test]
fn bar_bottoms_sit_on_axis_line() {
    let bins = example_bins();
    let geometry = geometry(&bins);
    for bar in geometry.project_bars(&bins) {
        assert_relative_eq!(bar.y + bar.height, HEIGHT_FOR_BARS, epsilon = 1e-9);
    }
}

#[test]
fn zero_width_bin_yields_negative_width() {
    let bins = example_bins();
    let geometry = geometry(&bins);
    let last = geometry.calculate_position_and_dimensions(&bins[2]);

    assert_relative_eq!(last.width, -1.0);
    assert_relative_eq!(last.height, 0.0);
    assert!(!last.is_drawable());
}

#[test]
fn tallest_bar_fills_height() {
    let bins = example_bins();
    assert_eq!(max_bin_value(&bins, true), 5.0);

    let dims = geometry(&bins).calculate_dimensions(&bins[1]);
    assert_relative_eq!(dims.height, HEIGHT_FOR_BARS);
}

#[test]
fn empty_data_uses_unit_value_scale() {
    let bins = vec![Bin {
        x0: 0.0,
        x1: 1000.0,
        point_indices: Vec::new(),
        y_value: 0.0,
    }];
    let y_scale = value_scale_for_bins(&bins, HEIGHT_FOR_BARS, false);

    assert_relative_eq!(y_scale.scale(1.0), 0.0);
    assert_relative_eq!(y_scale.scale(0.0), HEIGHT_FOR_BARS);
    let bar = BarGeometry::new(
        TimeScale::new(TimeDomain::new(0.0, 1000.0), (10.0, 490.0)),
        y_scale,
        HEIGHT_FOR_BARS,
        1.0,
    )
    .calculate_position_and_dimensions(&bins[0]);
    assert_relative_eq!(bar.height, 0.0);
    assert!(!bar.is_drawable());
}
