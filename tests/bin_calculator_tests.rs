use histogram_rs::core::{
    DataPoint, DataPointAccessor, TimeDomain, TimeScale, bin_with_thresholds, calculate_bins,
};

fn three_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(500.0, 2.0),
        DataPoint::new(999.0, 3.0),
    ]
}

#[test]
fn two_bars_split_on_nice_ticks() {
    let data = three_points();
    let scale = TimeScale::new(TimeDomain::new(0.0, 1000.0), (10.0, 490.0)).nice(2.0);
    assert_eq!(scale.domain(), TimeDomain::new(0.0, 1000.0));

    let bins = calculate_bins(&data, &DataPointAccessor, &scale, 2);
    let bounds: Vec<(f64, f64)> = bins.iter().map(|bin| (bin.x0, bin.x1)).collect();
    assert_eq!(bounds, vec![(0.0, 500.0), (500.0, 1000.0), (1000.0, 1000.0)]);

    assert_eq!(bins[0].point_indices, vec![0]);
    assert_eq!(bins[0].y_value, 1.0);
    assert_eq!(bins[1].point_indices, vec![1, 2]);
    assert_eq!(bins[1].y_value, 5.0);
    assert!(bins[2].is_empty());
    assert_eq!(bins[2].y_value, 0.0);
}

#[test]
fn every_in_domain_point_lands_in_exactly_one_bin() {
    let data: Vec<DataPoint> = (0..200)
        .map(|i| DataPoint::new(f64::from(i) * 37.0, 1.0))
        .collect();
    let scale = TimeScale::new(TimeDomain::new(0.0, 7364.0), (0.0, 400.0)).nice(18.0);
    let bins = calculate_bins(&data, &DataPointAccessor, &scale, 18);

    let mut seen: Vec<usize> = bins
        .iter()
        .flat_map(|bin| bin.point_indices.iter().copied())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..200).collect::<Vec<_>>());

    let total: f64 = bins.iter().map(|bin| bin.y_value).sum();
    assert_eq!(total, 200.0);
}

#[test]
fn bins_are_contiguous_and_cover_domain() {
    let data = three_points();
    let scale = TimeScale::new(TimeDomain::new(0.0, 1000.0), (0.0, 480.0)).nice(10.0);
    let bins = calculate_bins(&data, &DataPointAccessor, &scale, 10);
    let domain = scale.domain();

    assert_eq!(bins.first().map(|bin| bin.x0), Some(domain.min));
    assert_eq!(bins.last().map(|bin| bin.x1), Some(domain.max));
    for pair in bins.windows(2) {
        assert_eq!(pair[0].x1, pair[1].x0);
        assert!(pair[0].x0 <= pair[0].x1);
    }
}

#[test]
fn points_outside_domain_are_not_counted() {
    let data = vec![
        DataPoint::new(-1.0, 9.0),
        DataPoint::new(250.0, 1.0),
        DataPoint::new(1001.0, 9.0),
    ];
    let bins = bin_with_thresholds(&data, &DataPointAccessor, (0.0, 1000.0), &[500.0]);

    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].point_indices, vec![1]);
    assert!(bins[1].is_empty());
}

#[test]
fn degenerate_domain_gives_single_bin() {
    let data = vec![DataPoint::new(42.0, 2.0), DataPoint::new(42.0, 3.0)];
    let scale = TimeScale::new(TimeDomain::collapsed(42.0), (0.0, 480.0));
    let bins = calculate_bins(&data, &DataPointAccessor, &scale, 18);

    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].x0, 42.0);
    assert_eq!(bins[0].x1, 42.0);
    assert_eq!(bins[0].y_value, 5.0);
}

#[test]
fn bin_points_resolve_against_dataset() {
    let data = three_points();
    let bins = bin_with_thresholds(&data, &DataPointAccessor, (0.0, 1000.0), &[500.0]);
    let times: Vec<f64> = bins[1].points(&data).map(|point| point.time).collect();

    assert_eq!(times, vec![500.0, 999.0]);
}

#[test]
fn empty_dataset_still_yields_bins() {
    let data: Vec<DataPoint> = Vec::new();
    let bins = bin_with_thresholds(&data, &DataPointAccessor, (0.0, 1000.0), &[250.0, 500.0]);

    assert_eq!(bins.len(), 3);
    assert!(bins.iter().all(|bin| bin.is_empty() && bin.y_value == 0.0));
}

#[test]
fn points_past_the_calendar_range_land_in_a_bin() {
    let data = vec![DataPoint::new(0.0, 1.0), DataPoint::new(9.5e15, 2.0)];
    let scale = TimeScale::new(TimeDomain::new(0.0, 9.5e15 + 1.0), (10.0, 490.0)).nice(18.0);
    assert!(scale.domain().max >= 9.5e15 + 1.0);

    let bins = calculate_bins(&data, &DataPointAccessor, &scale, 18);
    let total: f64 = bins.iter().map(|bin| bin.y_value).sum();
    assert_eq!(total, 3.0);
}
