use serde::{Deserialize, Serialize};

use crate::core::layout::BARS_TICK_RATIO;
use crate::core::{LinearScale, TimeScale};

/// One axis tick: data value, pixel position along the axis, and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// X ticks for the bar chart, one per [`BARS_TICK_RATIO`] bars.
pub(super) fn x_axis_ticks(
    bar_scale: TimeScale,
    bar_count: usize,
    format: &dyn Fn(f64) -> String,
) -> Vec<AxisTick> {
    bar_scale
        .ticks(bar_count as f64 / BARS_TICK_RATIO)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: bar_scale.scale(value),
            label: format(value),
        })
        .collect()
}

pub(super) fn y_axis_ticks(
    value_scale: LinearScale,
    tick_count: usize,
    format: &dyn Fn(f64) -> String,
) -> Vec<AxisTick> {
    value_scale
        .ticks(tick_count as f64)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: value_scale.scale(value),
            label: format(value),
        })
        .collect()
}
