use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{HistogramError, HistogramResult};

pub const X_AXIS_HEIGHT: f64 = 18.0;
/// Fraction of the bar-chart width kept free on each side of the time scale.
pub const X_AXIS_PADDING: f64 = 0.02;
pub const Y_AXIS_PADDING: f64 = 3.0;
pub const CONTROL_PADDING: f64 = 20.0;
/// One x-axis tick per this many bars.
pub const BARS_TICK_RATIO: f64 = 3.0;
pub const MIN_ZOOM_VALUE: f64 = 1.0;
pub const DENSITY_CHART_HEIGHT_PX: f64 = 20.0;
pub const MIN_TOTAL_HEIGHT: f64 = 150.0;
pub const PADDING: f64 = 10.0;
pub const DEFAULT_SPACE_BETWEEN_CHARTS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartDimensions {
    pub width: f64,
    pub height: f64,
    /// Height left for bars once the x axis is laid out.
    pub height_for_bars: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewDimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub bar_chart: BarChartDimensions,
    pub overview: OverviewDimensions,
}

impl ChartLayout {
    /// Pixel range the bar-chart time scale maps onto.
    #[must_use]
    pub fn bar_time_range(self) -> (f64, f64) {
        let width = self.bar_chart.width;
        (width * X_AXIS_PADDING, width * (1.0 - X_AXIS_PADDING))
    }

    #[must_use]
    pub fn overview_range(self) -> (f64, f64) {
        (0.0, self.overview.width)
    }
}

/// Inputs of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub height: f64,
    pub width: f64,
    pub has_control: bool,
    pub space_between_charts: f64,
    pub overview_height: f64,
    pub padding: f64,
}

impl LayoutInput {
    #[must_use]
    pub fn new(height: f64, width: f64) -> Self {
        Self {
            height,
            width,
            has_control: true,
            space_between_charts: DEFAULT_SPACE_BETWEEN_CHARTS,
            overview_height: DENSITY_CHART_HEIGHT_PX,
            padding: PADDING,
        }
    }

    #[must_use]
    pub fn with_has_control(mut self, has_control: bool) -> Self {
        self.has_control = has_control;
        self
    }

    #[must_use]
    pub fn with_space_between_charts(mut self, space: f64) -> Self {
        self.space_between_charts = space;
        self
    }
}

/// Rejects totals below [`MIN_TOTAL_HEIGHT`].
pub fn ensure_min_height(height: f64) -> HistogramResult<()> {
    if height >= MIN_TOTAL_HEIGHT {
        Ok(())
    } else {
        Err(HistogramError::HeightBelowMinimum {
            height,
            min: MIN_TOTAL_HEIGHT,
        })
    }
}

/// Splits the container into the bar chart and the overview strip.
pub fn calculate_chart_layout(input: LayoutInput) -> HistogramResult<ChartLayout> {
    ensure_min_height(input.height)?;

    let bar_height = input.height - input.overview_height - input.space_between_charts;
    let control_padding = if input.has_control && input.width > input.padding * 2.0 {
        CONTROL_PADDING
    } else {
        0.0
    };

    let layout = ChartLayout {
        bar_chart: BarChartDimensions {
            width: input.width - input.padding,
            height: bar_height,
            height_for_bars: bar_height - X_AXIS_HEIGHT,
        },
        overview: OverviewDimensions {
            width: input.width - input.padding * 4.0 - control_padding,
            height: input.overview_height,
        },
    };
    trace!(
        width = input.width,
        height = input.height,
        has_control = input.has_control,
        "chart layout computed"
    );
    Ok(layout)
}
