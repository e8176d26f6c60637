pub mod bar_geometry;
pub mod bins;
pub mod domain;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod time_domain;
pub mod time_interval;
pub mod time_scale;
pub mod types;

pub use bar_geometry::{
    BarDimensions, BarGeometry, BarRect, max_bin_value, value_scale_for_bins,
};
pub use bins::{Bin, bin_with_thresholds, calculate_bins};
pub use domain::{DomainPatch, DomainResolveInput, DomainState, resolve_domain};
pub use layout::{
    BarChartDimensions, ChartLayout, LayoutInput, OverviewDimensions, calculate_chart_layout,
};
pub use scale::{LinearScale, TickVec};
pub use time_domain::{
    DataSnapshot, SampleKey, TimeDomain, TimeValue, date_to_timestamp, is_histogram_data_equal,
    now_timestamp_ms, time_extent,
};
pub use time_interval::{TimeInterval, TimeUnit};
pub use time_scale::TimeScale;
pub use types::{DataPoint, DataPointAccessor, FnAccessor, HistogramAccessor};
