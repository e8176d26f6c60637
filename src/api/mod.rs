mod axis_label_format;
mod axis_ticks;
mod data_controller;
mod density;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_snapshot;
mod gesture_controller;
mod json_contract;
mod playback_controller;
mod render_frame_builder;
mod state;
mod validation;

pub use axis_label_format::{AxisLabelFormatter, default_y_axis_label, multi_date_format};
pub use axis_ticks::AxisTick;
pub use density::{DENSITY_MARK_WIDTH_PX, DensityMark};
pub use engine::{HistogramEngine, HistogramView};
pub use engine_config::{HistogramConfig, HistogramStyle, IntervalChangeGuard};
pub use engine_snapshot::HistogramSnapshot;
pub use gesture_controller::{GestureOutcome, IntervalChange};
pub use json_contract::{HISTOGRAM_SNAPSHOT_JSON_SCHEMA_V1, HistogramSnapshotJsonContractV1};
pub use state::{HistogramState, HistogramStatePatch, StateInput, derive_state_patch};
