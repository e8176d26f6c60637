use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_timestamp_ms, decimal_to_f64};
use crate::core::time_domain::TimeValue;
use crate::error::HistogramResult;

/// Reads the time and value fields of an opaque dataset record.
///
/// Implementations must be pure: the same point always yields the same
/// output, otherwise change detection reports spurious updates.
pub trait HistogramAccessor<P> {
    fn time_of(&self, point: &P) -> TimeValue;

    fn value_of(&self, point: &P) -> f64;

    /// Canonical epoch-millisecond time of `point`.
    fn timestamp_of(&self, point: &P) -> f64 {
        self.time_of(point).timestamp_ms()
    }
}

/// Accessor built from two closures.
///
/// ```
/// use histogram_rs::core::{FnAccessor, HistogramAccessor};
///
/// struct Transaction {
///     at_ms: i64,
///     amount: f64,
/// }
///
/// let accessor = FnAccessor::new(|tx: &Transaction| tx.at_ms, |tx: &Transaction| tx.amount);
/// let tx = Transaction { at_ms: 1_000, amount: 2.5 };
/// assert_eq!(accessor.timestamp_of(&tx), 1_000.0);
/// ```
pub struct FnAccessor<T, V, R> {
    time_of: T,
    value_of: V,
    _time: PhantomData<fn() -> R>,
}

impl<T, V, R> FnAccessor<T, V, R> {
    #[must_use]
    pub fn new<P>(time_of: T, value_of: V) -> Self
    where
        T: Fn(&P) -> R,
        V: Fn(&P) -> f64,
        R: Into<TimeValue>,
    {
        Self {
            time_of,
            value_of,
            _time: PhantomData,
        }
    }
}

impl<P, T, V, R> HistogramAccessor<P> for FnAccessor<T, V, R>
where
    T: Fn(&P) -> R,
    V: Fn(&P) -> f64,
    R: Into<TimeValue>,
{
    fn time_of(&self, point: &P) -> TimeValue {
        (self.time_of)(point).into()
    }

    fn value_of(&self, point: &P) -> f64 {
        (self.value_of)(point)
    }
}

/// Ready-made record for hosts without their own point type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Epoch milliseconds.
    pub time: f64,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self {
            time: datetime_to_timestamp_ms(time),
            value,
        }
    }

    pub fn from_decimal_amount(time: DateTime<Utc>, amount: Decimal) -> HistogramResult<Self> {
        Ok(Self {
            time: datetime_to_timestamp_ms(time),
            value: decimal_to_f64(amount, "amount")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataPointAccessor;

impl HistogramAccessor<DataPoint> for DataPointAccessor {
    fn time_of(&self, point: &DataPoint) -> TimeValue {
        TimeValue::Millis(point.time)
    }

    fn value_of(&self, point: &DataPoint) -> f64 {
        point.value
    }
}
