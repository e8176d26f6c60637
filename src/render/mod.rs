mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::HistogramResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code never
/// sees scales, bins or gesture state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> HistogramResult<()>;
}
