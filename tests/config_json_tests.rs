use std::time::Duration;

use histogram_rs::api::{HistogramStyle, IntervalChangeGuard};
use histogram_rs::core::{DataPoint, DataPointAccessor};
use histogram_rs::render::{Color, NullRenderer};
use histogram_rs::{HistogramConfig, HistogramEngine, HistogramError};

#[test]
fn config_json_roundtrip() {
    let config = HistogramConfig::new(240.0)
        .with_default_bar_count(24)
        .with_min_zoom_unit(60_000.0)
        .with_playback(0.05, 250)
        .with_interval_change_guard(IntervalChangeGuard::EitherBound);

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = HistogramConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
    assert_eq!(restored.frame_delay(), Duration::from_millis(250));
}

#[test]
fn omitted_fields_take_defaults() {
    let config = HistogramConfig::from_json_str(r#"{ "height": 200.0 }"#).expect("partial config");

    assert_eq!(config.height, 200.0);
    assert_eq!(config.default_bar_count, 18);
    assert_eq!(config.min_zoom_unit, 1_000.0);
    assert_eq!(config.frame_delay_ms, 500);
    assert!(config.render_play_button);
    assert_eq!(config.interval_change_guard, IntervalChangeGuard::BothBounds);
    assert_eq!(config.style, HistogramStyle::default());
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(
        HistogramConfig::from_json_str("{ height: }"),
        Err(HistogramError::InvalidConfig(_))
    ));
}

#[test]
fn interval_guard_semantics() {
    let old = [0.0, 1000.0];
    assert!(!IntervalChangeGuard::BothBounds.has_changed(old, [0.0, 800.0]));
    assert!(IntervalChangeGuard::BothBounds.has_changed(old, [100.0, 800.0]));
    assert!(IntervalChangeGuard::EitherBound.has_changed(old, [0.0, 800.0]));
    assert!(!IntervalChangeGuard::EitherBound.has_changed(old, old));
}

fn init(config: HistogramConfig) -> Result<(), HistogramError> {
    HistogramEngine::<DataPoint, _, _>::new(NullRenderer::default(), DataPointAccessor, config)
        .map(|_| ())
}

#[test]
fn engine_validates_config() {
    assert!(init(HistogramConfig::default()).is_ok());
    assert!(matches!(
        init(HistogramConfig::default().with_default_bar_count(0)),
        Err(HistogramError::InvalidConfig(_))
    ));
    assert!(matches!(
        init(HistogramConfig::default().with_min_zoom_unit(0.0)),
        Err(HistogramError::InvalidConfig(_))
    ));
    assert!(matches!(
        init(HistogramConfig::default().with_playback(0.025, 0)),
        Err(HistogramError::InvalidConfig(_))
    ));
    assert!(matches!(
        init(HistogramConfig::default().with_bar_margin(-1.0)),
        Err(HistogramError::InvalidConfig(_))
    ));
    assert!(matches!(
        init(HistogramConfig::new(f64::NAN)),
        Err(HistogramError::InvalidConfig(_))
    ));

    let style = HistogramStyle {
        bar_color: Color::rgba(0.1, 0.2, 1.5, 1.0),
        ..HistogramStyle::default()
    };
    assert!(matches!(
        init(HistogramConfig::default().with_style(style)),
        Err(HistogramError::InvalidConfig(_))
    ));
}

#[test]
fn set_config_rebuilds_view() {
    let mut engine =
        HistogramEngine::new(NullRenderer::default(), DataPointAccessor, HistogramConfig::default())
            .expect("engine init");
    engine.set_container_width(510.0).expect("width");
    engine
        .set_data(vec![DataPoint::new(0.0, 1.0), DataPoint::new(999.0, 1.0)])
        .expect("set data");
    let before = engine.bins().len();

    engine
        .set_config(HistogramConfig::default().with_default_bar_count(4))
        .expect("config");
    assert!(engine.bins().len() < before);
    assert!(matches!(
        engine.set_config(HistogramConfig::new(120.0)),
        Err(HistogramError::HeightBelowMinimum { .. })
    ));
}
