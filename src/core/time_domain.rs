use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_timestamp_ms, timestamp_ms_to_datetime};
use crate::core::types::HistogramAccessor;

/// A time as produced by an accessor: epoch milliseconds or a UTC date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeValue {
    Millis(f64),
    Date(DateTime<Utc>),
}

impl TimeValue {
    #[must_use]
    pub fn timestamp_ms(self) -> f64 {
        match self {
            Self::Millis(millis) => millis,
            Self::Date(date) => datetime_to_timestamp_ms(date),
        }
    }

    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(millis) => timestamp_ms_to_datetime(millis),
            Self::Date(date) => Some(date),
        }
    }
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        Self::Millis(value as f64)
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// Canonicalizes any accepted time representation to epoch milliseconds.
#[must_use]
pub fn date_to_timestamp(value: impl Into<TimeValue>) -> f64 {
    value.into().timestamp_ms()
}

#[must_use]
pub fn now_timestamp_ms() -> f64 {
    datetime_to_timestamp_ms(Utc::now())
}

/// Closed time range in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub min: f64,
    pub max: f64,
}

impl TimeDomain {
    /// Builds a domain, swapping the bounds when they arrive reversed.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Zero-width domain anchored at `at`.
    #[must_use]
    pub fn collapsed(at: f64) -> Self {
        Self { min: at, max: at }
    }

    #[must_use]
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    #[must_use]
    pub fn as_pair(self) -> [f64; 2] {
        [self.min, self.max]
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.span() > 0.0)
    }

    /// Half-open membership test, `min <= time < max`.
    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.min && time < self.max
    }
}

/// Finite `(min, max)` of the accessor times, ignoring non-finite samples.
#[must_use]
pub fn time_extent<P, A: HistogramAccessor<P>>(data: &[P], accessor: &A) -> Option<(f64, f64)> {
    data.iter()
        .map(|point| accessor.timestamp_of(point))
        .filter(|time| time.is_finite())
        .fold(None, |extent, time| match extent {
            None => Some((time, time)),
            Some((min, max)) => Some((min.min(time), max.max(time))),
        })
}

/// Accessor output for one record, used for change detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleKey {
    pub time: f64,
    pub value: f64,
}

/// Accessor-projected copy of a dataset.
///
/// The engine keeps the snapshot of the last resolved dataset instead of the
/// records themselves, so records do not need to be `Clone`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    samples: Vec<SampleKey>,
}

impl DataSnapshot {
    #[must_use]
    pub fn capture<P, A: HistogramAccessor<P>>(data: &[P], accessor: &A) -> Self {
        Self {
            samples: data
                .iter()
                .map(|point| SampleKey {
                    time: accessor.timestamp_of(point),
                    value: accessor.value_of(point),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[SampleKey] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Element-wise comparison of `data` against this snapshot.
    ///
    /// NaN never equals itself, so malformed accessor output always reads as
    /// a change.
    #[must_use]
    pub fn matches<P, A: HistogramAccessor<P>>(&self, data: &[P], accessor: &A) -> bool {
        self.samples.len() == data.len()
            && self.samples.iter().zip(data).all(|(sample, point)| {
                sample.time == accessor.timestamp_of(point)
                    && sample.value == accessor.value_of(point)
            })
    }
}

/// Element-wise accessor equality of two datasets.
#[must_use]
pub fn is_histogram_data_equal<P, A: HistogramAccessor<P>>(
    accessor: &A,
    left: &[P],
    right: &[P],
) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|(a, b)| {
            accessor.timestamp_of(a) == accessor.timestamp_of(b)
                && accessor.value_of(a) == accessor.value_of(b)
        })
}
