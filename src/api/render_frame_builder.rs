use crate::core::HistogramAccessor;
use crate::core::layout::{PADDING, X_AXIS_HEIGHT, Y_AXIS_PADDING};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::HistogramEngine;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const BRUSH_STROKE_WIDTH: f64 = 1.0;

/// Materializes the bar chart, its axes and the overview strip.
///
/// The overview sits below the bar chart, right-aligned with a
/// `2 * PADDING` gutter; anything with a non-finite or empty extent is left
/// out so the frame always validates.
pub(super) fn build_render_frame<P, A: HistogramAccessor<P>, R: Renderer>(
    engine: &HistogramEngine<P, A, R>,
) -> Option<RenderFrame> {
    let layout = engine.layout()?;
    engine.view()?;
    let style = engine.config.style;
    let mut frame = RenderFrame::new(engine.container_width, engine.config.height);

    for (_, bar) in engine.drawable_bars() {
        frame = frame.with_rect(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            style.bar_color,
        ));
    }

    let axis_y = layout.bar_chart.height_for_bars;
    frame = frame.with_line(LinePrimitive::horizontal(
        axis_y,
        0.0,
        layout.bar_chart.width,
        AXIS_STROKE_WIDTH,
        style.axis_color,
    ));
    for tick in engine.x_axis_ticks() {
        if tick.label.is_empty() || !tick.position.is_finite() {
            continue;
        }
        frame = frame.with_text(TextPrimitive::new(
            tick.label,
            tick.position,
            axis_y + X_AXIS_HEIGHT,
            style.font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }
    for tick in engine.y_axis_ticks() {
        if tick.label.is_empty() || !tick.position.is_finite() {
            continue;
        }
        frame = frame.with_text(TextPrimitive::new(
            tick.label,
            Y_AXIS_PADDING,
            tick.position,
            style.font_size_px,
            style.label_color,
            TextHAlign::Left,
        ));
    }

    let overview_x = engine.container_width - PADDING * 2.0 - layout.overview.width;
    let overview_y = layout.bar_chart.height + engine.config.space_between_charts;
    for mark in engine.density_marks() {
        let x = overview_x + mark.x;
        if !x.is_finite() || mark.height <= 0.0 {
            continue;
        }
        let fill = if mark.inside_brush {
            style.density_color
        } else {
            style.density_faded_color
        };
        frame = frame.with_rect(RectPrimitive::new(x, overview_y, mark.width, mark.height, fill));
    }

    if let Some(selection) = engine.brush_selection().filter(|range| range.is_finite()) {
        let bottom = overview_y + layout.overview.height;
        for edge in [selection.start, selection.end] {
            frame = frame.with_line(LinePrimitive::vertical(
                overview_x + edge,
                overview_y,
                bottom,
                BRUSH_STROKE_WIDTH,
                style.axis_color,
            ));
        }
    }

    Some(frame)
}
