use tracing::{debug, trace};

use crate::core::layout::LayoutInput;
use crate::core::{
    BarGeometry, BarRect, Bin, HistogramAccessor, LinearScale, TimeDomain, TimeScale,
    calculate_bins, now_timestamp_ms, value_scale_for_bins,
};
use crate::error::HistogramResult;
use crate::interaction::{ZoomConstraints, ZoomTransform};
use crate::render::Renderer;

use super::axis_label_format::{AxisLabelFormatter, default_y_axis_label, multi_date_format};
use super::render_frame_builder::build_render_frame;
use super::state::{HistogramState, StateInput, derive_state_patch};
use super::validation::validate_config;
use super::{HistogramConfig, IntervalChange};

/// Scales, bins and bars derived from the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramView {
    pub bar_scale: TimeScale,
    pub overview_scale: TimeScale,
    pub value_scale: LinearScale,
    pub zoom_constraints: ZoomConstraints,
    pub bins: Vec<Bin>,
    pub bars: Vec<BarRect>,
}

pub(super) type IntervalListener = Box<dyn FnMut(IntervalChange) + Send>;

/// Main facade consumed by host applications.
///
/// `HistogramEngine` owns the dataset, its accessor and the derived state;
/// every input change runs the layout/domain reducer and then rebuilds bins
/// and bars from scratch.
pub struct HistogramEngine<P, A, R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: HistogramConfig,
    pub(super) accessor: A,
    pub(super) data: Vec<P>,
    pub(super) container_width: f64,
    pub(super) brush_domain_override: Option<TimeDomain>,
    pub(super) state: HistogramState,
    pub(super) view: Option<HistogramView>,
    pub(super) zoom_transform: ZoomTransform,
    pub(super) interval_listener: Option<IntervalListener>,
    pub(super) x_axis_formatter: AxisLabelFormatter,
    pub(super) y_axis_formatter: AxisLabelFormatter,
    pub(super) clock: fn() -> f64,
}

impl<P, A: HistogramAccessor<P>, R: Renderer> HistogramEngine<P, A, R> {
    /// Creates an engine with no data and no container width yet.
    pub fn new(renderer: R, accessor: A, config: HistogramConfig) -> HistogramResult<Self> {
        let config = validate_config(config)?;
        Ok(Self {
            renderer,
            config,
            accessor,
            data: Vec::new(),
            container_width: 0.0,
            brush_domain_override: None,
            state: HistogramState::default(),
            view: None,
            zoom_transform: ZoomTransform::identity(),
            interval_listener: None,
            x_axis_formatter: Box::new(multi_date_format),
            y_axis_formatter: Box::new(default_y_axis_label),
            clock: now_timestamp_ms,
        })
    }

    /// Replaces the "now" source used to anchor empty datasets.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> f64) -> Self {
        self.clock = clock;
        self
    }

    pub fn render(&mut self) -> HistogramResult<()> {
        let Some(frame) = build_render_frame(self) else {
            trace!("render skipped, no layout yet");
            return Ok(());
        };
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn layout_input(&self) -> LayoutInput {
        LayoutInput::new(self.config.height, self.container_width)
            .with_has_control(self.config.render_play_button)
            .with_space_between_charts(self.config.space_between_charts)
    }

    /// Runs the reducer over the current inputs, then rebuilds the view.
    ///
    /// A pass that moves the overall domain or the layout also drops any zoom
    /// transform, since it was expressed against the old geometry.
    pub(super) fn recompute(&mut self, force_view: bool) -> HistogramResult<()> {
        let patch = derive_state_patch(
            &self.state,
            StateInput {
                layout: self.layout_input(),
                data: &self.data,
                accessor: &self.accessor,
                brush_domain_override: self.brush_domain_override,
                now_ms: (self.clock)(),
            },
        )?;
        if patch.is_empty() {
            return Ok(());
        }

        let geometry_changed = patch.layout.is_some()
            || patch
                .domain
                .as_ref()
                .is_some_and(|domain| domain.overall_time_domain.is_some());
        let data_changed = patch
            .domain
            .as_ref()
            .is_some_and(|domain| domain.data.is_some());
        let rebuild = force_view || geometry_changed || data_changed || patch.changes_domain();
        self.state.apply(patch);

        if geometry_changed && !self.zoom_transform.is_identity() {
            debug!("zoom transform reset after geometry change");
            self.zoom_transform = ZoomTransform::identity();
        }
        if rebuild || self.view.is_none() {
            self.rebuild_view();
        }
        Ok(())
    }

    /// Rebuilds scales, bins and bars for the current brushed domain.
    pub(super) fn rebuild_view(&mut self) {
        let (Some(layout), Some(brush_domain), Some(overall)) = (
            self.state.layout,
            self.state.brush_domain(),
            self.state.overall_time_domain(),
        ) else {
            self.view = None;
            return;
        };

        let bar_count = self.config.default_bar_count;
        let bar_scale =
            TimeScale::new(brush_domain, layout.bar_time_range()).nice(bar_count as f64);
        let bins = calculate_bins(&self.data, &self.accessor, &bar_scale, bar_count);
        let value_scale =
            value_scale_for_bins(&bins, layout.bar_chart.height_for_bars, !self.data.is_empty());
        let bars = BarGeometry::new(
            bar_scale,
            value_scale,
            layout.bar_chart.height_for_bars,
            self.config.bar_margin,
        )
        .project_bars(&bins);

        debug!(
            bins = bins.len(),
            min = brush_domain.min,
            max = brush_domain.max,
            "histogram view rebuilt"
        );
        self.view = Some(HistogramView {
            bar_scale,
            overview_scale: TimeScale::new(overall, layout.overview_range()),
            value_scale,
            zoom_constraints: ZoomConstraints::for_domain(
                overall.span(),
                self.config.min_zoom_unit,
                layout.overview.width,
            ),
            bins,
            bars,
        });
    }
}
