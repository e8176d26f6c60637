use crate::core::{BarRect, Bin, ChartLayout, HistogramAccessor, LinearScale, TimeDomain, TimeScale};
use crate::interaction::{PixelRange, ZoomConstraints, ZoomTransform};
use crate::render::Renderer;

use super::axis_ticks::{x_axis_ticks, y_axis_ticks};
use super::density::density_marks;
use super::state::HistogramState;
use super::{AxisTick, DensityMark, HistogramConfig, HistogramEngine, HistogramView};

impl<P, A: HistogramAccessor<P>, R: Renderer> HistogramEngine<P, A, R> {
    #[must_use]
    pub fn config(&self) -> HistogramConfig {
        self.config
    }

    #[must_use]
    pub fn data(&self) -> &[P] {
        &self.data
    }

    #[must_use]
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    #[must_use]
    pub fn state(&self) -> &HistogramState {
        &self.state
    }

    #[must_use]
    pub fn layout(&self) -> Option<ChartLayout> {
        self.state.layout
    }

    #[must_use]
    pub fn brush_domain(&self) -> Option<TimeDomain> {
        self.state.brush_domain()
    }

    #[must_use]
    pub fn overall_time_domain(&self) -> Option<TimeDomain> {
        self.state.overall_time_domain()
    }

    #[must_use]
    pub fn view(&self) -> Option<&HistogramView> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        self.view
            .as_ref()
            .map(|view| view.bins.as_slice())
            .unwrap_or_default()
    }

    /// Every bar rectangle, aligned with [`HistogramEngine::bins`].
    #[must_use]
    pub fn bar_rects(&self) -> &[BarRect] {
        self.view
            .as_ref()
            .map(|view| view.bars.as_slice())
            .unwrap_or_default()
    }

    /// Bars worth drawing, with their bin index.
    pub fn drawable_bars(&self) -> impl Iterator<Item = (usize, BarRect)> + '_ {
        self.bar_rects()
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, bar)| bar.is_drawable())
    }

    #[must_use]
    pub fn bar_scale(&self) -> Option<TimeScale> {
        self.view.as_ref().map(|view| view.bar_scale)
    }

    #[must_use]
    pub fn overview_scale(&self) -> Option<TimeScale> {
        self.view.as_ref().map(|view| view.overview_scale)
    }

    #[must_use]
    pub fn value_scale(&self) -> Option<LinearScale> {
        self.view.as_ref().map(|view| view.value_scale)
    }

    #[must_use]
    pub fn zoom_transform(&self) -> ZoomTransform {
        self.zoom_transform
    }

    #[must_use]
    pub fn zoom_constraints(&self) -> Option<ZoomConstraints> {
        self.view.as_ref().map(|view| view.zoom_constraints)
    }

    /// Overview pixels covered by the brushed window.
    #[must_use]
    pub fn brush_selection(&self) -> Option<PixelRange> {
        let scale = self.overview_scale()?;
        let brush = self.brush_domain()?;
        Some(PixelRange::new(scale.scale(brush.min), scale.scale(brush.max)))
    }

    #[must_use]
    pub fn x_axis_ticks(&self) -> Vec<AxisTick> {
        self.view.as_ref().map_or_else(Vec::new, |view| {
            x_axis_ticks(
                view.bar_scale,
                self.config.default_bar_count,
                &*self.x_axis_formatter,
            )
        })
    }

    #[must_use]
    pub fn y_axis_ticks(&self) -> Vec<AxisTick> {
        self.view.as_ref().map_or_else(Vec::new, |view| {
            y_axis_ticks(
                view.value_scale,
                self.config.y_axis_ticks,
                &*self.y_axis_formatter,
            )
        })
    }

    #[must_use]
    pub fn density_marks(&self) -> Vec<DensityMark> {
        let (Some(view), Some(layout), Some(brush)) =
            (self.view.as_ref(), self.state.layout, self.brush_domain())
        else {
            return Vec::new();
        };
        density_marks(
            &self.data,
            &self.accessor,
            view.overview_scale,
            brush,
            layout.overview.height,
        )
    }
}
