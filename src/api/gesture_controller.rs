use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{HistogramAccessor, TimeDomain};
use crate::interaction::{
    BrushEvent, PixelRange, SourceEventType, ZoomEvent, ZoomTransform,
};
use crate::render::Renderer;

use super::HistogramEngine;

/// Payload of the interval listener.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalChange {
    /// New brushed window, epoch ms.
    pub domain: [f64; 2],
    /// The window equals the overall time domain.
    pub is_full_domain: bool,
}

/// What a handled gesture asks of the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureOutcome {
    /// Brush position the gesture layer should show, in overview pixels.
    pub brush_selection: Option<PixelRange>,
    /// Zoom transform the gesture layer should adopt.
    pub zoom_transform: Option<ZoomTransform>,
    /// Reported change, when the update guard let one through.
    pub interval_change: Option<IntervalChange>,
}

impl<P, A: HistogramAccessor<P>, R: Renderer> HistogramEngine<P, A, R> {
    /// Registers the listener notified when the brushed window changes.
    pub fn set_interval_listener(&mut self, listener: impl FnMut(IntervalChange) + Send + 'static) {
        self.interval_listener = Some(Box::new(listener));
    }

    pub fn clear_interval_listener(&mut self) {
        self.interval_listener = None;
    }

    /// Handles a brush on the overview strip.
    ///
    /// Brush events caused by the zoom are dropped. A cleared brush selects
    /// the whole overview, and the outcome asks the host to move the brush
    /// there.
    pub fn on_overview_brush(&mut self, event: BrushEvent) -> Option<GestureOutcome> {
        if event.source_event_type == SourceEventType::Zoom {
            trace!("brush event from zoom ignored");
            return None;
        }
        let view = self.view.as_ref()?;
        let overview_scale = view.overview_scale;
        let constraints = view.zoom_constraints;

        let (selection, moved) = match event.selection {
            Some(selection) if selection.is_finite() => (selection, false),
            Some(selection) => {
                warn!(
                    start = selection.start,
                    end = selection.end,
                    "non-finite brush selection ignored"
                );
                return None;
            }
            None => {
                let (start, end) = overview_scale.range();
                (PixelRange::new(start, end), true)
            }
        };
        trace!(start = selection.start, end = selection.end, "overview brush");

        let zoom_transform = ZoomTransform::from_brush_selection(selection, constraints.width)
            .map(|transform| constraints.constrain(transform));
        if let Some(transform) = zoom_transform {
            self.zoom_transform = transform;
        }

        let domain = TimeDomain::new(
            overview_scale.invert(selection.start),
            overview_scale.invert(selection.end),
        );
        Some(GestureOutcome {
            brush_selection: moved.then_some(selection),
            zoom_transform,
            interval_change: self.update_brushed_domain(domain),
        })
    }

    /// Handles a zoom or pan on the bar chart.
    ///
    /// Zoom events caused by the brush are dropped. The transform is clamped
    /// to the allowed scale and translate extents before use.
    pub fn on_bar_chart_zoom(&mut self, event: ZoomEvent) -> Option<GestureOutcome> {
        if event.source_event_type == SourceEventType::Brush {
            trace!("zoom event from brush ignored");
            return None;
        }
        let view = self.view.as_ref()?;
        let overview_scale = view.overview_scale;
        let transform = view.zoom_constraints.constrain(event.transform);
        if !(transform.k.is_finite() && transform.x.is_finite()) {
            warn!(k = transform.k, x = transform.x, "non-finite zoom transform ignored");
            return None;
        }
        trace!(k = transform.k, x = transform.x, "bar chart zoom");
        self.zoom_transform = transform;

        let domain = transform.rescale(overview_scale).domain();
        let interval_change = self.update_brushed_domain(domain);
        Some(GestureOutcome {
            brush_selection: self.brush_selection(),
            zoom_transform: Some(transform),
            interval_change,
        })
    }

    /// Applies an overview window produced by code, such as a playback frame.
    pub fn apply_frame_window(&mut self, window: PixelRange) -> Option<GestureOutcome> {
        self.on_overview_brush(BrushEvent::new(
            Some(window),
            SourceEventType::Programmatic,
        ))
    }

    /// Stores `domain` as the brushed window when the configured guard sees a
    /// change, rebuilds the view and notifies the listener.
    pub fn update_brushed_domain(&mut self, domain: TimeDomain) -> Option<IntervalChange> {
        let previous = self.state.brush_domain()?;
        if !self
            .config
            .interval_change_guard
            .has_changed(previous.as_pair(), domain.as_pair())
        {
            trace!(
                min = domain.min,
                max = domain.max,
                "brushed domain change below guard"
            );
            return None;
        }

        self.state.domain.brush_domain = Some(domain);
        self.rebuild_view();

        let change = IntervalChange {
            domain: domain.as_pair(),
            is_full_domain: self.state.overall_time_domain() == Some(domain),
        };
        if let Some(listener) = self.interval_listener.as_mut() {
            listener(change);
        }
        Some(change)
    }
}
