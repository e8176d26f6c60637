//! histogram-rs: domain and geometry engine for an interactive time
//! histogram.
//!
//! The crate bins a time-stamped dataset into bars for the visible window,
//! keeps the full domain, the brushed window and pixel geometry consistent
//! under resize, data changes, zoom and brush gestures, and drives a
//! time-lapse playback of the window. Drawing is left to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{HistogramConfig, HistogramEngine};
pub use error::{HistogramError, HistogramResult};
