use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::bins::Bin;
use crate::core::scale::LinearScale;
use crate::core::time_scale::TimeScale;

/// Pixel rectangle of one histogram bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    /// Bars with a non-positive side are skipped by renderers.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarDimensions {
    pub width: f64,
    pub height: f64,
}

/// Scales and constants shared by every bar of a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub height_for_bars: f64,
    pub margin: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn new(x_scale: TimeScale, y_scale: LinearScale, height_for_bars: f64, margin: f64) -> Self {
        Self {
            x_scale,
            y_scale,
            height_for_bars,
            margin,
        }
    }

    #[must_use]
    pub fn calculate_dimensions(&self, bin: &Bin) -> BarDimensions {
        BarDimensions {
            width: self.x_scale.scale(bin.x1) - self.x_scale.scale(bin.x0) - self.margin,
            height: self.height_for_bars - self.y_scale.scale(bin.y_value),
        }
    }

    #[must_use]
    pub fn calculate_position_and_dimensions(&self, bin: &Bin) -> BarRect {
        let BarDimensions { width, height } = self.calculate_dimensions(bin);
        BarRect {
            x: self.x_scale.scale(bin.x0) + self.margin / 2.0,
            y: self.y_scale.scale(bin.y_value),
            width,
            height,
        }
    }

    /// One rectangle per bin, in bin order, drawable or not.
    #[must_use]
    pub fn project_bars(&self, bins: &[Bin]) -> Vec<BarRect> {
        bins.iter()
            .map(|bin| self.calculate_position_and_dimensions(bin))
            .collect()
    }
}

/// Largest bin sum, or 1 when there is nothing to show.
///
/// A zero maximum would collapse the value scale, so all-zero bins fall back
/// to 1 like an empty dataset does.
#[must_use]
pub fn max_bin_value(bins: &[Bin], has_data: bool) -> f64 {
    if !has_data {
        return 1.0;
    }
    bins.iter()
        .map(|bin| OrderedFloat(bin.y_value))
        .filter(|value| value.is_finite())
        .max()
        .map(|value| value.0)
        .filter(|value| *value != 0.0)
        .unwrap_or(1.0)
}

/// Value scale mapping `[0, max]` onto `[height_for_bars, 0]`.
#[must_use]
pub fn value_scale_for_bins(bins: &[Bin], height_for_bars: f64, has_data: bool) -> LinearScale {
    LinearScale::new((0.0, max_bin_value(bins, has_data)), (height_for_bars, 0.0))
}
