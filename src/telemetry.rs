//! Telemetry helpers for applications embedding `histogram-rs`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. Recompute passes and domain resets log at `debug`, gestures and
//! playback ticks at `trace`.

/// Filter used when `RUST_LOG` is unset: engine passes at `debug`, everything
/// else at `info`.
pub const DEFAULT_TRACING_FILTER: &str = "info,histogram_rs=debug";

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"histogram_rs::interaction=trace"` to follow playback ticks.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
