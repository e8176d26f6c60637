use tracing::debug;

use crate::core::{HistogramAccessor, TimeDomain};
use crate::error::HistogramResult;
use crate::render::Renderer;

use super::validation::{validate_config, validate_container_width};
use super::{HistogramConfig, HistogramEngine};

impl<P, A: HistogramAccessor<P>, R: Renderer> HistogramEngine<P, A, R> {
    /// Replaces the dataset.
    ///
    /// The brushed window is reset only when the data extent moves.
    pub fn set_data(&mut self, data: Vec<P>) -> HistogramResult<()> {
        debug!(points = data.len(), "set histogram data");
        self.data = data;
        self.recompute(false)
    }

    /// Updates the measured container width. Zero is accepted and leaves
    /// the derived state as it was.
    pub fn set_container_width(&mut self, width: f64) -> HistogramResult<()> {
        self.container_width = validate_container_width(width)?;
        self.recompute(false)
    }

    /// Sets an explicit brushed window.
    ///
    /// The override only takes effect when it differs from the last one
    /// passed in, so re-sending the same window after a gesture is a no-op.
    pub fn set_brush_domain_override(
        &mut self,
        brush_domain: Option<TimeDomain>,
    ) -> HistogramResult<()> {
        self.brush_domain_override = brush_domain;
        self.recompute(false)
    }

    pub fn set_render_play_button(&mut self, render_play_button: bool) -> HistogramResult<()> {
        self.config.render_play_button = render_play_button;
        self.recompute(false)
    }

    pub fn set_config(&mut self, config: HistogramConfig) -> HistogramResult<()> {
        self.config = validate_config(config)?;
        self.recompute(true)
    }

    /// Installs the x-axis label formatter (multi-scale dates by default).
    pub fn set_x_axis_formatter(&mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) {
        self.x_axis_formatter = Box::new(formatter);
    }

    /// Installs the y-axis label formatter (positive integers by default).
    pub fn set_y_axis_formatter(&mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) {
        self.y_axis_formatter = Box::new(formatter);
    }
}
