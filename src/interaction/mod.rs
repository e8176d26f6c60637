mod playback;
mod playback_timer;
mod zoom;

pub use playback::{PlayRequest, PlaybackController, PlaybackState, PlaybackTick};
pub use playback_timer::{PlaybackEvent, PlaybackTimer};
pub use zoom::{ZoomConstraints, ZoomTransform};

use serde::{Deserialize, Serialize};

/// Origin of a gesture event, as reported by the gesture layer.
///
/// Brush and zoom behaviors drive each other; each handler drops events
/// that the other one caused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceEventType {
    Zoom,
    Brush,
    /// Emitted by code rather than by the user (no source event).
    Programmatic,
    Other(String),
}

impl SourceEventType {
    #[must_use]
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            "zoom" => Self::Zoom,
            "brush" => Self::Brush,
            "" => Self::Programmatic,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Horizontal pixel interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Result of a brush gesture on the overview strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushEvent {
    /// `None` when the user cleared the brush.
    pub selection: Option<PixelRange>,
    pub source_event_type: SourceEventType,
}

impl BrushEvent {
    #[must_use]
    pub fn new(selection: Option<PixelRange>, source_event_type: SourceEventType) -> Self {
        Self {
            selection,
            source_event_type,
        }
    }
}

/// Result of a zoom or pan gesture on the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomEvent {
    pub transform: ZoomTransform,
    pub source_event_type: SourceEventType,
}

impl ZoomEvent {
    #[must_use]
    pub fn new(transform: ZoomTransform, source_event_type: SourceEventType) -> Self {
        Self {
            transform,
            source_event_type,
        }
    }
}
