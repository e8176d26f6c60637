//! UTC calendar intervals used to place "nice" time ticks.
//!
//! The interval table and selection rule follow the usual time-scale
//! convention: pick the calendar interval whose duration is closest (by
//! ratio) to `span / count`, fall back to round milliseconds for sub-second
//! spans and to multi-year steps for very long spans.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::scale::{TickVec, tick_step};

pub const DURATION_SECOND: f64 = 1_000.0;
pub const DURATION_MINUTE: f64 = DURATION_SECOND * 60.0;
pub const DURATION_HOUR: f64 = DURATION_MINUTE * 60.0;
pub const DURATION_DAY: f64 = DURATION_HOUR * 24.0;
pub const DURATION_WEEK: f64 = DURATION_DAY * 7.0;
pub const DURATION_MONTH: f64 = DURATION_DAY * 30.0;
pub const DURATION_YEAR: f64 = DURATION_DAY * 365.0;

const MAX_FILTER_STEPS: usize = 64;
const MAX_RANGE_LEN: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

const TICK_INTERVALS: [(TimeUnit, i64, f64); 18] = [
    (TimeUnit::Second, 1, DURATION_SECOND),
    (TimeUnit::Second, 5, 5.0 * DURATION_SECOND),
    (TimeUnit::Second, 15, 15.0 * DURATION_SECOND),
    (TimeUnit::Second, 30, 30.0 * DURATION_SECOND),
    (TimeUnit::Minute, 1, DURATION_MINUTE),
    (TimeUnit::Minute, 5, 5.0 * DURATION_MINUTE),
    (TimeUnit::Minute, 15, 15.0 * DURATION_MINUTE),
    (TimeUnit::Minute, 30, 30.0 * DURATION_MINUTE),
    (TimeUnit::Hour, 1, DURATION_HOUR),
    (TimeUnit::Hour, 3, 3.0 * DURATION_HOUR),
    (TimeUnit::Hour, 6, 6.0 * DURATION_HOUR),
    (TimeUnit::Hour, 12, 12.0 * DURATION_HOUR),
    (TimeUnit::Day, 1, DURATION_DAY),
    (TimeUnit::Day, 2, 2.0 * DURATION_DAY),
    (TimeUnit::Week, 1, DURATION_WEEK),
    (TimeUnit::Month, 1, DURATION_MONTH),
    (TimeUnit::Month, 3, 3.0 * DURATION_MONTH),
    (TimeUnit::Year, 1, DURATION_YEAR),
];

/// A calendar unit repeated every `step` units.
///
/// Sub-day units align to multiples of their size since the epoch, days align
/// to the day of month, months to the month of year and years to the year
/// number. Weeks start on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    unit: TimeUnit,
    step: i64,
}

impl TimeInterval {
    /// Returns `None` unless `step` is finite and at least one.
    #[must_use]
    pub fn new(unit: TimeUnit, step: f64) -> Option<Self> {
        let step = step.floor();
        if !step.is_finite() || step < 1.0 {
            return None;
        }
        let step = if unit == TimeUnit::Week { 1 } else { step as i64 };
        Some(Self { unit, step })
    }

    #[must_use]
    pub fn unit(self) -> TimeUnit {
        self.unit
    }

    #[must_use]
    pub fn step(self) -> i64 {
        self.step
    }

    /// Interval producing roughly `count` ticks over `start..stop`.
    ///
    /// Returns `None` when no sensible interval exists (non-finite input or a
    /// multi-year step below one year).
    #[must_use]
    pub fn for_tick_count(start: f64, stop: f64, count: f64) -> Option<Self> {
        let target = (stop - start).abs() / count;
        if !target.is_finite() {
            return None;
        }

        let index = TICK_INTERVALS.partition_point(|(_, _, duration)| *duration <= target);
        if index == TICK_INTERVALS.len() {
            let step = tick_step(start / DURATION_YEAR, stop / DURATION_YEAR, count);
            return Self::new(TimeUnit::Year, step);
        }
        if index > 0 {
            let lower = TICK_INTERVALS[index - 1];
            let upper = TICK_INTERVALS[index];
            let (unit, step, _) = if target / lower.2 < upper.2 / target {
                lower
            } else {
                upper
            };
            return Some(Self { unit, step });
        }

        Self::new(TimeUnit::Millisecond, tick_step(start, stop, count).max(1.0))
    }

    /// Latest interval boundary at or before `time`.
    ///
    /// Outside the calendar range chrono represents, boundaries fall back to
    /// multiples of the interval's nominal duration.
    #[must_use]
    pub fn floor(self, time: f64) -> f64 {
        if !time.is_finite() {
            return time;
        }
        if self.unit != TimeUnit::Millisecond {
            if let Some(floored) = self.floor_ms(time.floor() as i64) {
                return floored as f64;
            }
        }
        let size = self.nominal_size_ms();
        ((time / size).floor() * size).min(time)
    }

    /// Earliest interval boundary at or after `time`.
    #[must_use]
    pub fn ceil(self, time: f64) -> f64 {
        if !time.is_finite() {
            return time;
        }
        let ceiled = self.floor(self.offset(self.floor(time - 1.0), 1));
        if ceiled >= time {
            return ceiled;
        }
        let size = self.nominal_size_ms();
        ((time / size).ceil() * size).max(time)
    }

    /// Moves a boundary `count` intervals forward.
    #[must_use]
    pub fn offset(self, time: f64, count: u32) -> f64 {
        if !time.is_finite() {
            return time;
        }
        if self.unit != TimeUnit::Millisecond {
            if let Some(moved) = self.offset_ms(time.floor() as i64, count) {
                return moved as f64;
            }
        }
        time + f64::from(count) * self.nominal_size_ms()
    }

    /// Every boundary in `[start, stop)`.
    #[must_use]
    pub fn range(self, start: f64, stop: f64) -> TickVec {
        let mut out = TickVec::new();
        let mut current = self.ceil(start);
        if !(current < stop) {
            return out;
        }
        loop {
            out.push(current);
            let previous = current;
            current = self.floor(self.offset(current, 1));
            if !(previous < current && current < stop) || out.len() >= MAX_RANGE_LEN {
                break;
            }
        }
        out
    }

    fn nominal_size_ms(self) -> f64 {
        let unit_ms = match self.unit {
            TimeUnit::Millisecond => 1.0,
            TimeUnit::Second => DURATION_SECOND,
            TimeUnit::Minute => DURATION_MINUTE,
            TimeUnit::Hour => DURATION_HOUR,
            TimeUnit::Day => DURATION_DAY,
            TimeUnit::Week => DURATION_WEEK,
            TimeUnit::Month => DURATION_MONTH,
            TimeUnit::Year => DURATION_YEAR,
        };
        unit_ms * self.step as f64
    }

    fn fixed_unit_ms(self) -> Option<i64> {
        match self.unit {
            TimeUnit::Second => Some(1_000),
            TimeUnit::Minute => Some(60_000),
            TimeUnit::Hour => Some(3_600_000),
            _ => None,
        }
    }

    /// `None` when the boundary cannot be expressed as a calendar date.
    fn floor_ms(self, time: i64) -> Option<i64> {
        if let Some(unit_ms) = self.fixed_unit_ms() {
            let size = unit_ms.checked_mul(self.step)?;
            return Some(time.div_euclid(size) * size);
        }
        if self.unit == TimeUnit::Year {
            let step = i32::try_from(self.step).ok()?;
            let year = to_naive(time)?.year().div_euclid(step) * step;
            return year_start(year).map(to_ms);
        }

        let mut boundary = floor_unit(self.unit, to_naive(time)?);
        for _ in 0..MAX_FILTER_STEPS {
            if self.matches(boundary) {
                break;
            }
            boundary = floor_unit(self.unit, to_naive(to_ms(boundary) - 1)?);
        }
        Some(to_ms(boundary))
    }

    fn offset_ms(self, time: i64, count: u32) -> Option<i64> {
        if let Some(unit_ms) = self.fixed_unit_ms() {
            let size = unit_ms.checked_mul(self.step)?;
            return i64::from(count).checked_mul(size)?.checked_add(time);
        }
        if self.unit == TimeUnit::Year {
            let months = u32::try_from(self.step)
                .ok()?
                .checked_mul(12)?
                .checked_mul(count)?;
            return to_naive(time)?
                .checked_add_months(Months::new(months))
                .map(to_ms);
        }

        let mut current = to_naive(time)?;
        for _ in 0..count {
            for _ in 0..MAX_FILTER_STEPS {
                current = offset_unit(self.unit, current)?;
                if self.matches(current) {
                    break;
                }
            }
        }
        Some(to_ms(current))
    }

    fn matches(self, boundary: NaiveDateTime) -> bool {
        match self.unit {
            TimeUnit::Day => i64::from(boundary.day0()) % self.step == 0,
            TimeUnit::Month => i64::from(boundary.month0()) % self.step == 0,
            _ => true,
        }
    }
}

fn to_naive(time: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(time).map(|date| date.naive_utc())
}

fn to_ms(time: NaiveDateTime) -> i64 {
    time.and_utc().timestamp_millis()
}

fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|date| date.and_time(NaiveTime::MIN))
}

fn floor_unit(unit: TimeUnit, time: NaiveDateTime) -> NaiveDateTime {
    let date = time.date();
    let floored = match unit {
        TimeUnit::Week => {
            let back = date.weekday().num_days_from_sunday();
            date.checked_sub_days(Days::new(u64::from(back)))
                .unwrap_or(date)
        }
        TimeUnit::Month => date.with_day(1).unwrap_or(date),
        TimeUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        _ => date,
    };
    floored.and_time(NaiveTime::MIN)
}

fn offset_unit(unit: TimeUnit, time: NaiveDateTime) -> Option<NaiveDateTime> {
    match unit {
        TimeUnit::Week => time.checked_add_days(Days::new(7)),
        TimeUnit::Month => time.checked_add_months(Months::new(1)),
        TimeUnit::Year => time.checked_add_months(Months::new(12)),
        _ => time.checked_add_days(Days::new(1)),
    }
}
