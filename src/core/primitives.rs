use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{HistogramError, HistogramResult};

/// Largest absolute timestamp (ms) a calendar date is accepted for.
pub const MAX_TIMESTAMP_MS: f64 = 8.64e15;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> HistogramResult<f64> {
    value.to_f64().ok_or_else(|| {
        HistogramError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_timestamp_ms(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Converts epoch milliseconds to a UTC date, truncating sub-millisecond parts.
///
/// Returns `None` for non-finite input or values outside `±MAX_TIMESTAMP_MS`.
#[must_use]
pub fn timestamp_ms_to_datetime(timestamp_ms: f64) -> Option<DateTime<Utc>> {
    if !timestamp_ms.is_finite() || timestamp_ms.abs() > MAX_TIMESTAMP_MS {
        return None;
    }
    DateTime::from_timestamp_millis(timestamp_ms.trunc() as i64)
}
