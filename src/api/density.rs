use serde::{Deserialize, Serialize};

use crate::core::{HistogramAccessor, TimeDomain, TimeScale};

pub const DENSITY_MARK_WIDTH_PX: f64 = 2.0;

/// Overview strip mark for one data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityMark {
    /// Index of the point in the dataset.
    pub index: usize,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Point time lies in the brushed window, `min <= t < max`.
    pub inside_brush: bool,
}

pub(super) fn density_marks<P, A: HistogramAccessor<P>>(
    data: &[P],
    accessor: &A,
    overview_scale: TimeScale,
    brush_domain: TimeDomain,
    height: f64,
) -> Vec<DensityMark> {
    data.iter()
        .enumerate()
        .map(|(index, point)| {
            let time = accessor.timestamp_of(point);
            DensityMark {
                index,
                x: overview_scale.scale(time),
                width: DENSITY_MARK_WIDTH_PX,
                height,
                inside_brush: brush_domain.contains(time),
            }
        })
        .collect()
}
