use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::layout::{DEFAULT_SPACE_BETWEEN_CHARTS, MIN_TOTAL_HEIGHT};
use crate::error::{HistogramError, HistogramResult};
use crate::render::Color;

/// Which bound changes make a new brushed domain worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntervalChangeGuard {
    /// Report only when both `min` and `max` moved.
    ///
    /// Dragging one brush handle therefore does not notify the listener.
    #[default]
    BothBounds,
    /// Report when either bound moved.
    EitherBound,
}

impl IntervalChangeGuard {
    #[must_use]
    pub fn has_changed(self, old: [f64; 2], new: [f64; 2]) -> bool {
        let min_changed = old[0] != new[0];
        let max_changed = old[1] != new[1];
        match self {
            Self::BothBounds => min_changed && max_changed,
            Self::EitherBound => min_changed || max_changed,
        }
    }
}

/// Colors and font size used by the frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramStyle {
    pub bar_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    /// Overview marks inside the brushed window.
    pub density_color: Color,
    /// Overview marks outside the brushed window.
    pub density_faded_color: Color,
    pub font_size_px: f64,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(0.129, 0.588, 0.953),
            axis_color: Color::rgb(0.62, 0.62, 0.62),
            label_color: Color::rgb(0.26, 0.26, 0.26),
            density_color: Color::rgba(0.129, 0.588, 0.953, 0.2),
            density_faded_color: Color::rgba(0.69, 0.745, 0.773, 0.2),
            font_size_px: 10.0,
        }
    }
}

/// Histogram setup shared by every recompute pass.
///
/// Serializable so hosts can keep histogram presets next to their own
/// settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Total height in pixels, at least [`MIN_TOTAL_HEIGHT`].
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_bar_count")]
    pub default_bar_count: usize,
    /// Narrowest window, in ms, the bar chart may zoom to.
    #[serde(default = "default_min_zoom_unit")]
    pub min_zoom_unit: f64,
    /// Playback growth per frame as a fraction of the overview width.
    #[serde(default = "default_frame_step")]
    pub frame_step: f64,
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    #[serde(default = "default_bar_margin")]
    pub bar_margin: f64,
    #[serde(default = "default_space_between_charts")]
    pub space_between_charts: f64,
    #[serde(default = "default_y_axis_ticks")]
    pub y_axis_ticks: usize,
    #[serde(default = "default_render_play_button")]
    pub render_play_button: bool,
    #[serde(default)]
    pub interval_change_guard: IntervalChangeGuard,
    #[serde(default)]
    pub style: HistogramStyle,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            default_bar_count: default_bar_count(),
            min_zoom_unit: default_min_zoom_unit(),
            frame_step: default_frame_step(),
            frame_delay_ms: default_frame_delay_ms(),
            bar_margin: default_bar_margin(),
            space_between_charts: default_space_between_charts(),
            y_axis_ticks: default_y_axis_ticks(),
            render_play_button: default_render_play_button(),
            interval_change_guard: IntervalChangeGuard::default(),
            style: HistogramStyle::default(),
        }
    }
}

impl HistogramConfig {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_bar_count(mut self, bar_count: usize) -> Self {
        self.default_bar_count = bar_count;
        self
    }

    #[must_use]
    pub fn with_min_zoom_unit(mut self, min_zoom_unit: f64) -> Self {
        self.min_zoom_unit = min_zoom_unit;
        self
    }

    #[must_use]
    pub fn with_playback(mut self, frame_step: f64, frame_delay_ms: u64) -> Self {
        self.frame_step = frame_step;
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    #[must_use]
    pub fn with_bar_margin(mut self, margin: f64) -> Self {
        self.bar_margin = margin;
        self
    }

    #[must_use]
    pub fn with_space_between_charts(mut self, space: f64) -> Self {
        self.space_between_charts = space;
        self
    }

    #[must_use]
    pub fn with_y_axis_ticks(mut self, ticks: usize) -> Self {
        self.y_axis_ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_render_play_button(mut self, render_play_button: bool) -> Self {
        self.render_play_button = render_play_button;
        self
    }

    #[must_use]
    pub fn with_interval_change_guard(mut self, guard: IntervalChangeGuard) -> Self {
        self.interval_change_guard = guard;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: HistogramStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn frame_delay(self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn to_json_pretty(self) -> HistogramResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| HistogramError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses a config; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> HistogramResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| HistogramError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_height() -> f64 {
    MIN_TOTAL_HEIGHT
}

fn default_bar_count() -> usize {
    18
}

fn default_min_zoom_unit() -> f64 {
    1_000.0
}

fn default_frame_step() -> f64 {
    0.025
}

fn default_frame_delay_ms() -> u64 {
    500
}

fn default_bar_margin() -> f64 {
    1.0
}

fn default_space_between_charts() -> f64 {
    DEFAULT_SPACE_BETWEEN_CHARTS
}

fn default_y_axis_ticks() -> usize {
    3
}

fn default_render_play_button() -> bool {
    true
}
