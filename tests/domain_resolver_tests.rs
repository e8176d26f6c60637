use chrono::{TimeZone, Utc};
use histogram_rs::core::{
    DataPoint, DataPointAccessor, DomainPatch, DomainResolveInput, DomainState, FnAccessor,
    TimeDomain, resolve_domain,
};

const NOW: f64 = 1_533_164_400_000.0;

fn resolve(state: &DomainState, data: &[DataPoint], brush_override: Option<TimeDomain>) -> DomainPatch {
    resolve_domain(
        state,
        DomainResolveInput {
            data,
            accessor: &DataPointAccessor,
            brush_domain_override: brush_override,
            now_ms: NOW,
        },
    )
}

fn sample() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(500.0, 2.0),
        DataPoint::new(999.0, 3.0),
    ]
}

#[test]
fn empty_dataset_collapses_domains_to_now() {
    let patch = resolve(&DomainState::default(), &[], None);

    assert_eq!(patch.brush_domain, Some(TimeDomain::collapsed(NOW)));
    assert_eq!(patch.overall_time_domain, Some(TimeDomain::collapsed(NOW)));
    assert!(patch.data.expect("snapshot").is_empty());
    assert_eq!(patch.override_snapshot, None);
}

#[test]
fn overall_domain_spans_data_plus_one_millisecond() {
    let patch = resolve(&DomainState::default(), &sample(), None);

    assert_eq!(patch.overall_time_domain, Some(TimeDomain::new(0.0, 1000.0)));
    assert_eq!(patch.brush_domain, Some(TimeDomain::new(0.0, 1000.0)));
}

#[test]
fn unsorted_data_uses_true_extent() {
    let data = vec![
        DataPoint::new(40.0, 1.0),
        DataPoint::new(-20.0, 1.0),
        DataPoint::new(10.0, 1.0),
    ];
    let patch = resolve(&DomainState::default(), &data, None);

    assert_eq!(patch.overall_time_domain, Some(TimeDomain::new(-20.0, 41.0)));
}

#[test]
fn unchanged_inputs_are_idempotent() {
    let data = sample();
    let mut state = DomainState::default();
    state.apply(resolve(&state, &data, None));

    let again = resolve(&state, &data, None);
    assert!(again.is_domain_unchanged());
    assert!(again.data.is_none());

    let copy = data.clone();
    let with_copy = resolve(&state, &copy, None);
    assert!(with_copy.is_domain_unchanged());
}

#[test]
fn unchanged_data_keeps_user_brush() {
    let data = sample();
    let mut state = DomainState::default();
    state.apply(resolve(&state, &data, None));
    state.brush_domain = Some(TimeDomain::new(200.0, 400.0));

    state.apply(resolve(&state, &data, None));
    assert_eq!(state.brush_domain, Some(TimeDomain::new(200.0, 400.0)));
}

#[test]
fn moved_extent_resets_brush() {
    let mut state = DomainState::default();
    state.apply(resolve(&state, &sample(), None));
    state.brush_domain = Some(TimeDomain::new(200.0, 400.0));

    let mut grown = sample();
    grown.push(DataPoint::new(1_999.0, 1.0));
    state.apply(resolve(&state, &grown, None));

    assert_eq!(state.overall_time_domain, Some(TimeDomain::new(0.0, 2000.0)));
    assert_eq!(state.brush_domain, Some(TimeDomain::new(0.0, 2000.0)));
}

#[test]
fn override_wins_over_data_reset() {
    let brush_override = TimeDomain::new(100.0, 200.0);
    let patch = resolve(&DomainState::default(), &sample(), Some(brush_override));

    assert_eq!(patch.overall_time_domain, Some(TimeDomain::new(0.0, 1000.0)));
    assert_eq!(patch.brush_domain, Some(brush_override));
    assert_eq!(patch.override_snapshot, Some(brush_override));
}

#[test]
fn repeated_override_is_not_reapplied() {
    let brush_override = TimeDomain::new(100.0, 200.0);
    let data = sample();
    let mut state = DomainState::default();
    state.apply(resolve(&state, &data, Some(brush_override)));
    state.brush_domain = Some(TimeDomain::new(300.0, 600.0));

    let patch = resolve(&state, &data, Some(brush_override));
    assert!(patch.brush_domain.is_none());
    state.apply(patch);
    assert_eq!(state.brush_domain, Some(TimeDomain::new(300.0, 600.0)));

    let moved = TimeDomain::new(100.0, 250.0);
    let patch = resolve(&state, &data, Some(moved));
    assert_eq!(patch.brush_domain, Some(moved));
}

#[test]
fn clearing_override_records_none() {
    let brush_override = TimeDomain::new(100.0, 200.0);
    let data = sample();
    let mut state = DomainState::default();
    state.apply(resolve(&state, &data, Some(brush_override)));

    let patch = resolve(&state, &data, None);
    assert!(patch.is_domain_unchanged());
    state.apply(patch);
    assert_eq!(state.override_snapshot, None);
}

#[test]
fn nan_times_read_as_changed_and_empty() {
    let data = vec![DataPoint::new(f64::NAN, 1.0)];
    let patch = resolve(&DomainState::default(), &data, None);

    assert_eq!(patch.overall_time_domain, Some(TimeDomain::collapsed(NOW)));
}

#[test]
fn date_accessor_resolves_same_domain_as_millis() {
    struct Event {
        at: chrono::DateTime<Utc>,
        count: f64,
    }

    let base = Utc.timestamp_millis_opt(1_533_164_400_000).single().expect("date");
    let events = vec![
        Event { at: base, count: 1.0 },
        Event {
            at: base + chrono::Duration::milliseconds(999),
            count: 2.0,
        },
    ];
    let accessor = FnAccessor::new(|event: &Event| event.at, |event: &Event| event.count);

    let patch = resolve_domain(
        &DomainState::default(),
        DomainResolveInput {
            data: &events,
            accessor: &accessor,
            brush_domain_override: None,
            now_ms: NOW,
        },
    );
    assert_eq!(
        patch.overall_time_domain,
        Some(TimeDomain::new(1_533_164_400_000.0, 1_533_164_401_000.0))
    );
}
