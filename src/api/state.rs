use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::layout::ensure_min_height;
use crate::core::{
    ChartLayout, DomainPatch, DomainResolveInput, DomainState, HistogramAccessor, LayoutInput,
    TimeDomain, calculate_chart_layout, resolve_domain,
};
use crate::error::HistogramResult;

/// Derived state owned by the engine between passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramState {
    pub layout_input: Option<LayoutInput>,
    pub layout: Option<ChartLayout>,
    pub domain: DomainState,
}

impl HistogramState {
    pub fn apply(&mut self, patch: HistogramStatePatch) {
        if let Some((input, layout)) = patch.layout {
            self.layout_input = Some(input);
            self.layout = Some(layout);
        }
        if let Some(domain) = patch.domain {
            self.domain.apply(domain);
        }
    }

    #[must_use]
    pub fn brush_domain(&self) -> Option<TimeDomain> {
        self.domain.brush_domain
    }

    #[must_use]
    pub fn overall_time_domain(&self) -> Option<TimeDomain> {
        self.domain.overall_time_domain
    }
}

/// Changes produced by one reducer pass; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramStatePatch {
    pub layout: Option<(LayoutInput, ChartLayout)>,
    pub domain: Option<DomainPatch>,
}

impl HistogramStatePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layout.is_none() && self.domain.is_none()
    }

    /// True when the pass moved either domain.
    #[must_use]
    pub fn changes_domain(&self) -> bool {
        self.domain
            .as_ref()
            .is_some_and(|domain| !domain.is_domain_unchanged())
    }
}

/// Host inputs of one reducer pass.
pub struct StateInput<'a, P, A> {
    pub layout: LayoutInput,
    pub data: &'a [P],
    pub accessor: &'a A,
    pub brush_domain_override: Option<TimeDomain>,
    pub now_ms: f64,
}

/// Computes what the host inputs change in `previous`.
///
/// A zero container width is a transitional size and yields an empty patch.
pub fn derive_state_patch<P, A: HistogramAccessor<P>>(
    previous: &HistogramState,
    input: StateInput<'_, P, A>,
) -> HistogramResult<HistogramStatePatch> {
    ensure_min_height(input.layout.height)?;

    if input.layout.width == 0.0 {
        trace!("zero container width, derived state left untouched");
        return Ok(HistogramStatePatch::default());
    }

    let layout = if previous.layout_input == Some(input.layout) {
        None
    } else {
        let layout = calculate_chart_layout(input.layout)?;
        debug!(
            width = input.layout.width,
            bar_chart_width = layout.bar_chart.width,
            overview_width = layout.overview.width,
            "layout recomputed"
        );
        Some((input.layout, layout))
    };

    let domain = resolve_domain(
        &previous.domain,
        DomainResolveInput {
            data: input.data,
            accessor: input.accessor,
            brush_domain_override: input.brush_domain_override,
            now_ms: input.now_ms,
        },
    );

    Ok(HistogramStatePatch {
        layout,
        domain: Some(domain),
    })
}
