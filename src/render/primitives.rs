use serde::{Deserialize, Serialize};

use crate::error::{HistogramError, HistogramResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> HistogramResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels.iter().all(|value| (0.0..=1.0).contains(value)) {
            Ok(())
        } else {
            Err(HistogramError::InvalidData(format!(
                "color channels must lie in [0, 1], got {channels:?}"
            )))
        }
    }
}

/// Filled rectangle in pixel space: a bar or a density mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    pub fn validate(self) -> HistogramResult<()> {
        ensure_finite("rect", &[self.x, self.y, self.width, self.height])?;
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(HistogramError::InvalidData(format!(
                "rect size must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        self.fill.validate()
    }
}

/// Stroked segment in pixel space. The histogram only draws axis-aligned
/// segments: the x-axis baseline and the two brush edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    /// Segment at height `y` spanning `x_from..x_to`.
    #[must_use]
    pub const fn horizontal(y: f64, x_from: f64, x_to: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x_from, y, x_to, y, stroke_width, color)
    }

    /// Segment at `x` spanning `y_from..y_to`.
    #[must_use]
    pub const fn vertical(x: f64, y_from: f64, y_to: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x, y_from, x, y_to, stroke_width, color)
    }

    pub fn validate(self) -> HistogramResult<()> {
        ensure_finite("line", &[self.x1, self.y1, self.x2, self.y2])?;
        if !(self.stroke_width > 0.0 && self.stroke_width.is_finite()) {
            return Err(HistogramError::InvalidData(format!(
                "line stroke width must be finite and > 0, got {}",
                self.stroke_width
            )));
        }
        self.color.validate()
    }
}

/// Anchor of a label relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Axis label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> HistogramResult<()> {
        if self.text.trim().is_empty() {
            return Err(HistogramError::InvalidData(
                "axis label must not be blank".to_owned(),
            ));
        }
        ensure_finite("label", &[self.x, self.y, self.font_size_px])?;
        if self.font_size_px <= 0.0 {
            return Err(HistogramError::InvalidData(format!(
                "label font size must be > 0, got {}",
                self.font_size_px
            )));
        }
        self.color.validate()
    }
}

fn ensure_finite(kind: &str, values: &[f64]) -> HistogramResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(HistogramError::InvalidData(format!(
            "{kind} geometry must be finite, got {values:?}"
        )))
    }
}
