use crate::core::layout::ensure_min_height;
use crate::error::{HistogramError, HistogramResult};

use super::{HistogramConfig, HistogramStyle};

pub(super) fn validate_config(config: HistogramConfig) -> HistogramResult<HistogramConfig> {
    if !config.height.is_finite() {
        return Err(HistogramError::InvalidConfig(
            "height must be finite".to_owned(),
        ));
    }
    ensure_min_height(config.height)?;

    if config.default_bar_count == 0 {
        return Err(HistogramError::InvalidConfig(
            "default bar count must be > 0".to_owned(),
        ));
    }
    if !config.min_zoom_unit.is_finite() || config.min_zoom_unit <= 0.0 {
        return Err(HistogramError::InvalidConfig(
            "min zoom unit must be finite and > 0".to_owned(),
        ));
    }
    if !config.frame_step.is_finite() || config.frame_step <= 0.0 {
        return Err(HistogramError::InvalidConfig(
            "frame step must be finite and > 0".to_owned(),
        ));
    }
    if config.frame_delay_ms == 0 {
        return Err(HistogramError::InvalidConfig(
            "frame delay must be > 0 ms".to_owned(),
        ));
    }

    for (name, value) in [
        ("bar margin", config.bar_margin),
        ("space between charts", config.space_between_charts),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(HistogramError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    validate_style(config.style)?;
    Ok(config)
}

pub(super) fn validate_style(style: HistogramStyle) -> HistogramResult<HistogramStyle> {
    for color in [
        style.bar_color,
        style.axis_color,
        style.label_color,
        style.density_color,
        style.density_faded_color,
    ] {
        color
            .validate()
            .map_err(|e| HistogramError::InvalidConfig(format!("invalid style color: {e}")))?;
    }
    if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
        return Err(HistogramError::InvalidConfig(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(style)
}

pub(super) fn validate_container_width(width: f64) -> HistogramResult<f64> {
    if !width.is_finite() || width < 0.0 {
        return Err(HistogramError::InvalidData(format!(
            "container width must be finite and >= 0, got {width}"
        )));
    }
    Ok(width)
}
