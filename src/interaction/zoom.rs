use serde::{Deserialize, Serialize};

use crate::core::{TimeDomain, TimeScale};
use crate::core::layout::MIN_ZOOM_VALUE;

use super::PixelRange;

/// Horizontal zoom transform: pixel `p` shows what the base scale puts at
/// `(p - x) / k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self { k: 1.0, x: 0.0 }
    }

    #[must_use]
    pub fn new(k: f64, x: f64) -> Self {
        Self { k, x }
    }

    /// Transform that stretches `selection` over a `width`-wide extent.
    ///
    /// Returns `None` for an empty or non-finite selection.
    #[must_use]
    pub fn from_brush_selection(selection: PixelRange, width: f64) -> Option<Self> {
        let span = selection.width();
        if !selection.is_finite() || !width.is_finite() || span <= 0.0 {
            return None;
        }
        let k = width / span;
        Some(Self {
            k,
            x: -k * selection.start,
        })
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    #[must_use]
    pub fn apply_x(self, base: f64) -> f64 {
        base * self.k + self.x
    }

    #[must_use]
    pub fn invert_x(self, pixel: f64) -> f64 {
        (pixel - self.x) / self.k
    }

    /// Base scale with its domain replaced by what the transform shows.
    #[must_use]
    pub fn rescale(self, scale: TimeScale) -> TimeScale {
        let (start, end) = scale.range();
        let domain = TimeDomain {
            min: scale.invert(self.invert_x(start)),
            max: scale.invert(self.invert_x(end)),
        };
        scale.with_domain(domain)
    }

    fn translate(self, dx: f64) -> Self {
        Self {
            k: self.k,
            x: self.x + self.k * dx,
        }
    }
}

/// Scale and translate limits of the bar-chart zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConstraints {
    pub min_k: f64,
    pub max_k: f64,
    /// Width of both the viewport extent and the translate extent.
    pub width: f64,
}

impl ZoomConstraints {
    /// Limits for a full domain of `span` ms: zooming stops once the window
    /// would be narrower than `min_zoom_unit`.
    #[must_use]
    pub fn for_domain(span: f64, min_zoom_unit: f64, width: f64) -> Self {
        let max_k = span / min_zoom_unit;
        Self {
            min_k: MIN_ZOOM_VALUE,
            max_k: if max_k.is_finite() {
                max_k.max(MIN_ZOOM_VALUE)
            } else {
                MIN_ZOOM_VALUE
            },
            width,
        }
    }

    /// Clamps `k` into range around the extent center, then keeps the
    /// visible window inside `[0, width]`.
    #[must_use]
    pub fn constrain(self, transform: ZoomTransform) -> ZoomTransform {
        let mut transform = transform;
        let k = transform.k.clamp(self.min_k, self.max_k);
        if k != transform.k {
            let center = self.width / 2.0;
            let anchor = transform.invert_x(center);
            transform = ZoomTransform::new(k, center - anchor * k);
        }

        let dx0 = transform.invert_x(0.0);
        let dx1 = transform.invert_x(self.width) - self.width;
        let dx = if dx1 > dx0 {
            (dx0 + dx1) / 2.0
        } else if dx0 < 0.0 {
            dx0
        } else {
            dx1.max(0.0)
        };
        transform.translate(dx)
    }
}
