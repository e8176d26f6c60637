use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Tick values are few per axis; keep them inline.
pub type TickVec = SmallVec<[f64; 24]>;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a value domain to a pixel range.
///
/// A degenerate domain maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let t = normalize(self.domain_start, self.domain_end, value);
        self.range_start + t * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t = normalize(self.range_start, self.range_end, pixel);
        self.domain_start + t * (self.domain_end - self.domain_start)
    }

    /// Round-number ticks inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: f64) -> TickVec {
        ticks(self.domain_start, self.domain_end, count)
    }
}

pub(crate) fn normalize(start: f64, end: f64, value: f64) -> f64 {
    let span = end - start;
    if span == 0.0 {
        0.5
    } else if span.is_nan() {
        f64::NAN
    } else {
        (value - start) / span
    }
}

/// Step between round ticks spanning `start..stop`, signed like the span.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let step0 = (stop - start).abs() / count.max(0.0);
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= E10 {
        step1 *= 10.0;
    } else if error >= E5 {
        step1 *= 5.0;
    } else if error >= E2 {
        step1 *= 2.0;
    }
    if stop < start { -step1 } else { step1 }
}

/// Positive for steps >= 1, otherwise the negated inverse of the step.
///
/// Working with the inverse keeps sub-unit ticks exact (`0.1` is computed
/// as `1 / 10` instead of accumulating float error).
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Round-number ticks between `start` and `stop` (inclusive when aligned).
#[must_use]
pub fn ticks(start: f64, stop: f64, count: f64) -> TickVec {
    let mut out = TickVec::new();
    if start == stop && count > 0.0 {
        out.push(start);
        return out;
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return out;
    }

    if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).ceil().max(0.0) as usize;
        out.extend((0..n).map(|i| (first + i as f64) * step));
    } else {
        let first = (lo * step).floor();
        let last = (hi * step).ceil();
        let n = (first - last + 1.0).ceil().max(0.0) as usize;
        out.extend((0..n).map(|i| (first - i as f64) / step));
    }

    if reverse {
        out.reverse();
    }
    out
}
