use serde::{Deserialize, Serialize};

use crate::core::scale::{TickVec, normalize};
use crate::core::time_domain::TimeDomain;
use crate::core::time_interval::TimeInterval;

/// Linear mapping from epoch-millisecond time to pixels.
///
/// Values are immutable: `nice`, `with_domain` and `with_range` return new
/// scales, so every recompute pass builds its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    #[must_use]
    pub fn new(domain: TimeDomain, range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.min,
            domain_end: domain.max,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> TimeDomain {
        TimeDomain {
            min: self.domain_start,
            max: self.domain_end,
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn with_domain(self, domain: TimeDomain) -> Self {
        Self::new(domain, self.range())
    }

    #[must_use]
    pub fn with_range(self, range: (f64, f64)) -> Self {
        Self::new(self.domain(), range)
    }

    /// Pixel position of `time`.
    #[must_use]
    pub fn scale(self, time: f64) -> f64 {
        let t = normalize(self.domain_start, self.domain_end, time);
        self.range_start + t * (self.range_end - self.range_start)
    }

    /// Time at `pixel`, truncated to whole milliseconds.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t = normalize(self.range_start, self.range_end, pixel);
        (self.domain_start + t * (self.domain_end - self.domain_start)).trunc()
    }

    /// Calendar-aligned ticks covering the domain, bounds included when aligned.
    #[must_use]
    pub fn ticks(self, count: f64) -> TickVec {
        let (start, stop) = self.sorted_domain();
        let Some(interval) = TimeInterval::for_tick_count(start, stop, count) else {
            return TickVec::new();
        };
        let mut ticks = interval.range(start, stop + 1.0);
        if self.domain_end < self.domain_start {
            ticks.reverse();
        }
        ticks
    }

    /// Extends the domain outward to the boundaries of the tick interval for `count`.
    #[must_use]
    pub fn nice(self, count: f64) -> Self {
        let (start, stop) = self.sorted_domain();
        let Some(interval) = TimeInterval::for_tick_count(start, stop, count) else {
            return self;
        };
        // Never shrink: a boundary that misses its bound keeps the raw value.
        let nice_start = interval.floor(start).min(start);
        let nice_stop = interval.ceil(stop).max(stop);
        let domain = if self.domain_end < self.domain_start {
            (nice_stop, nice_start)
        } else {
            (nice_start, nice_stop)
        };
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            ..self
        }
    }

    fn sorted_domain(self) -> (f64, f64) {
        if self.domain_end < self.domain_start {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        }
    }
}
