use serde::{Deserialize, Serialize};

use crate::core::{BarRect, Bin, ChartLayout, HistogramAccessor, TimeDomain};
use crate::interaction::ZoomTransform;
use crate::render::Renderer;

use super::{AxisTick, HistogramConfig, HistogramEngine};

/// Serializable copy of the derived state, for regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSnapshot {
    pub config: HistogramConfig,
    pub container_width: f64,
    pub point_count: usize,
    pub layout: Option<ChartLayout>,
    pub overall_time_domain: Option<TimeDomain>,
    pub brush_domain: Option<TimeDomain>,
    pub zoom_transform: ZoomTransform,
    pub bins: Vec<Bin>,
    pub bars: Vec<BarRect>,
    pub x_axis_ticks: Vec<AxisTick>,
    pub y_axis_ticks: Vec<AxisTick>,
}

impl<P, A: HistogramAccessor<P>, R: Renderer> HistogramEngine<P, A, R> {
    #[must_use]
    pub fn snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot {
            config: self.config,
            container_width: self.container_width,
            point_count: self.data.len(),
            layout: self.layout(),
            overall_time_domain: self.overall_time_domain(),
            brush_domain: self.brush_domain(),
            zoom_transform: self.zoom_transform,
            bins: self.bins().to_vec(),
            bars: self.bar_rects().to_vec(),
            x_axis_ticks: self.x_axis_ticks(),
            y_axis_ticks: self.y_axis_ticks(),
        }
    }
}
