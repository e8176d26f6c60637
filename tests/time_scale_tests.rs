use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use histogram_rs::core::{TimeDomain, TimeScale, date_to_timestamp};

fn ms(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    date_to_timestamp(
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("valid date"),
    )
}

#[test]
fn week_domain_ticks_on_midnights() {
    let domain = TimeDomain::new(ms(2018, 8, 1, 0, 0), ms(2018, 8, 8, 0, 0));
    let ticks = TimeScale::new(domain, (0.0, 700.0)).ticks(7.0);

    assert_eq!(ticks.len(), 8);
    assert_eq!(ticks[0], ms(2018, 8, 1, 0, 0));
    assert_eq!(ticks[7], ms(2018, 8, 8, 0, 0));
}

#[test]
fn nice_extends_to_hour_boundaries() {
    let domain = TimeDomain::new(ms(2018, 8, 1, 9, 17), ms(2018, 8, 1, 20, 41));
    let scale = TimeScale::new(domain, (0.0, 500.0)).nice(10.0);

    assert_eq!(scale.domain(), TimeDomain::new(ms(2018, 8, 1, 9, 0), ms(2018, 8, 1, 21, 0)));
    assert_eq!(scale.range(), (0.0, 500.0));
}

#[test]
fn nice_is_stable_on_aligned_domain() {
    let domain = TimeDomain::new(ms(2018, 8, 1, 0, 0), ms(2018, 8, 2, 0, 0));
    let scale = TimeScale::new(domain, (0.0, 240.0)).nice(18.0);
    assert_eq!(scale.domain(), domain);
    assert_eq!(scale.nice(18.0), scale);
}

#[test]
fn scale_and_invert_are_linear() {
    let scale = TimeScale::new(TimeDomain::new(1_000.0, 3_000.0), (10.0, 410.0));

    assert_relative_eq!(scale.scale(1_000.0), 10.0);
    assert_relative_eq!(scale.scale(2_000.0), 210.0);
    assert_relative_eq!(scale.scale(4_000.0), 610.0);
    assert_eq!(scale.invert(210.0), 2_000.0);
    assert_eq!(scale.invert(210.3), 2_001.0);
}

#[test]
fn collapsed_domain_maps_to_range_middle() {
    let scale = TimeScale::new(TimeDomain::collapsed(5_000.0), (0.0, 100.0));
    assert_relative_eq!(scale.scale(5_000.0), 50.0);
    assert_eq!(scale.ticks(18.0).as_slice(), &[5_000.0]);
}

#[test]
fn with_domain_and_range_rebuild_scale() {
    let scale = TimeScale::new(TimeDomain::new(0.0, 100.0), (0.0, 10.0));
    let moved = scale
        .with_domain(TimeDomain::new(100.0, 200.0))
        .with_range((0.0, 20.0));

    assert_eq!(moved.domain(), TimeDomain::new(100.0, 200.0));
    assert_eq!(moved.range(), (0.0, 20.0));
    assert_relative_eq!(moved.scale(150.0), 10.0);
    assert_relative_eq!(scale.scale(50.0), 5.0);
}
