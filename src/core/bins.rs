use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::time_scale::TimeScale;
use crate::core::types::HistogramAccessor;

/// One histogram bar before projection to pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    /// Indices into the dataset the bin was computed from.
    pub point_indices: Vec<usize>,
    /// Sum of the accessor values of the points in the bin.
    pub y_value: f64,
}

impl Bin {
    #[must_use]
    pub fn len(&self) -> usize {
        self.point_indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_indices.is_empty()
    }

    /// Resolves the bin's points against the dataset it was computed from.
    pub fn points<'a, P>(&'a self, data: &'a [P]) -> impl Iterator<Item = &'a P> + 'a {
        self.point_indices
            .iter()
            .filter_map(move |&index| data.get(index))
    }
}

/// Bins `data` over the domain of `x_scale`, using its ticks for `bar_count`
/// as thresholds.
///
/// The scale is expected to be niced already so the thresholds line up with
/// the domain bounds.
#[must_use]
pub fn calculate_bins<P, A: HistogramAccessor<P>>(
    data: &[P],
    accessor: &A,
    x_scale: &TimeScale,
    bar_count: usize,
) -> Vec<Bin> {
    let domain = x_scale.domain();
    let thresholds = x_scale.ticks(bar_count as f64);
    let bins = bin_with_thresholds(data, accessor, (domain.min, domain.max), &thresholds);
    trace!(
        bins = bins.len(),
        points = data.len(),
        min = domain.min,
        max = domain.max,
        "histogram bins computed"
    );
    bins
}

/// Histogram over `[x0, x1]` split at `thresholds`.
///
/// Thresholds at or before `x0` and after `x1` are ignored. Bins are
/// half-open except the last, which includes `x1`; points outside the
/// domain are not counted.
#[must_use]
pub fn bin_with_thresholds<P, A: HistogramAccessor<P>>(
    data: &[P],
    accessor: &A,
    (x0, x1): (f64, f64),
    thresholds: &[f64],
) -> Vec<Bin> {
    let start = thresholds.partition_point(|&t| t <= x0);
    let end = thresholds.len() - thresholds.iter().rev().take_while(|&&t| t > x1).count();
    let cuts = if start < end {
        &thresholds[start..end]
    } else {
        &[][..]
    };

    let mut bins: Vec<Bin> = (0..=cuts.len())
        .map(|i| Bin {
            x0: if i == 0 { x0 } else { cuts[i - 1] },
            x1: cuts.get(i).copied().unwrap_or(x1),
            point_indices: Vec::new(),
            y_value: 0.0,
        })
        .collect();

    for (index, point) in data.iter().enumerate() {
        let time = accessor.timestamp_of(point);
        if !(x0 <= time && time <= x1) {
            continue;
        }
        let slot = cuts.partition_point(|&t| t <= time);
        let bin = &mut bins[slot];
        bin.point_indices.push(index);
        bin.y_value += accessor.value_of(point);
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::bin_with_thresholds;
    use crate::core::{DataPoint, DataPointAccessor};

    #[test]
    fn thresholds_outside_domain_are_ignored() {
        let data = vec![DataPoint::new(5.0, 1.0), DataPoint::new(15.0, 2.0)];
        let bins = bin_with_thresholds(
            &data,
            &DataPointAccessor,
            (0.0, 20.0),
            &[-10.0, 0.0, 10.0, 20.0, 30.0],
        );
        let bounds: Vec<(f64, f64)> = bins.iter().map(|bin| (bin.x0, bin.x1)).collect();
        assert_eq!(bounds, vec![(0.0, 10.0), (10.0, 20.0), (20.0, 20.0)]);
        assert_eq!(bins[0].point_indices, vec![0]);
        assert_eq!(bins[1].y_value, 2.0);
    }

    #[test]
    fn no_thresholds_yield_single_bin() {
        let data = vec![DataPoint::new(3.0, 4.0)];
        let bins = bin_with_thresholds(&data, &DataPointAccessor, (3.0, 3.0), &[]);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].y_value, 4.0);
    }
}
