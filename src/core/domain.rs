use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::time_domain::{DataSnapshot, TimeDomain, time_extent};
use crate::core::types::HistogramAccessor;

/// Domain-related state carried between resolver passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainState {
    pub data: Option<DataSnapshot>,
    pub brush_domain: Option<TimeDomain>,
    pub overall_time_domain: Option<TimeDomain>,
    pub override_snapshot: Option<TimeDomain>,
}

impl DomainState {
    /// Folds `patch` into this state; absent patch fields keep their value.
    pub fn apply(&mut self, patch: DomainPatch) {
        if let Some(data) = patch.data {
            self.data = Some(data);
        }
        if let Some(brush_domain) = patch.brush_domain {
            self.brush_domain = Some(brush_domain);
        }
        if let Some(overall) = patch.overall_time_domain {
            self.overall_time_domain = Some(overall);
        }
        self.override_snapshot = patch.override_snapshot;
    }
}

pub struct DomainResolveInput<'a, P, A> {
    pub data: &'a [P],
    pub accessor: &'a A,
    pub brush_domain_override: Option<TimeDomain>,
    /// Anchor used for empty datasets.
    pub now_ms: f64,
}

/// Fields a resolver pass wants to change.
///
/// `override_snapshot` is always set to the override seen by the pass,
/// including `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainPatch {
    pub data: Option<DataSnapshot>,
    pub brush_domain: Option<TimeDomain>,
    pub overall_time_domain: Option<TimeDomain>,
    pub override_snapshot: Option<TimeDomain>,
}

impl DomainPatch {
    /// True when the pass leaves both domains untouched.
    #[must_use]
    pub fn is_domain_unchanged(&self) -> bool {
        self.brush_domain.is_none() && self.overall_time_domain.is_none()
    }
}

/// Resolves the overall and brushed domains for a dataset.
///
/// Unchanged data together with an unchanged override yields a patch without
/// domain fields, so repeated passes never disturb a user-chosen window.
#[must_use]
pub fn resolve_domain<P, A: HistogramAccessor<P>>(
    previous: &DomainState,
    input: DomainResolveInput<'_, P, A>,
) -> DomainPatch {
    let mut patch = DomainPatch {
        override_snapshot: input.brush_domain_override,
        ..DomainPatch::default()
    };

    let extent = time_extent(input.data, input.accessor);
    let Some((min_time, max_time)) = extent else {
        let now = TimeDomain::collapsed(input.now_ms);
        debug!(now_ms = input.now_ms, "empty dataset, domains collapsed to now");
        patch.data = Some(DataSnapshot::capture(input.data, input.accessor));
        patch.brush_domain = Some(now);
        patch.overall_time_domain = Some(now);
        return patch;
    };

    let data_changed = previous
        .data
        .as_ref()
        .is_none_or(|snapshot| !snapshot.matches(input.data, input.accessor));

    if data_changed {
        patch.data = Some(DataSnapshot::capture(input.data, input.accessor));
        let overall = TimeDomain::new(min_time, max_time + 1.0);
        if previous.overall_time_domain != Some(overall) {
            debug!(
                min = overall.min,
                max = overall.max,
                points = input.data.len(),
                "overall time domain reset"
            );
            patch.overall_time_domain = Some(overall);
            patch.brush_domain = Some(overall);
        }
    }

    if let Some(brush_override) = input
        .brush_domain_override
        .filter(|candidate| previous.override_snapshot != Some(*candidate))
    {
        debug!(
            min = brush_override.min,
            max = brush_override.max,
            "brush domain override applied"
        );
        patch.brush_domain = Some(brush_override);
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::{DomainResolveInput, DomainState, resolve_domain};
    use crate::core::{DataPoint, DataPointAccessor, TimeDomain};

    #[test]
    fn changed_data_with_same_extent_keeps_brush() {
        let mut state = DomainState::default();
        let first = vec![DataPoint::new(0.0, 1.0), DataPoint::new(10.0, 1.0)];
        state.apply(resolve_domain(
            &state,
            DomainResolveInput {
                data: &first,
                accessor: &DataPointAccessor,
                brush_domain_override: None,
                now_ms: 0.0,
            },
        ));
        state.brush_domain = Some(TimeDomain::new(2.0, 5.0));

        let second = vec![DataPoint::new(0.0, 4.0), DataPoint::new(10.0, 1.0)];
        let patch = resolve_domain(
            &state,
            DomainResolveInput {
                data: &second,
                accessor: &DataPointAccessor,
                brush_domain_override: None,
                now_ms: 0.0,
            },
        );
        assert!(patch.data.is_some());
        assert!(patch.is_domain_unchanged());
    }
}
