use tracing::trace;

use crate::core::HistogramAccessor;
use crate::interaction::{PlayRequest, PlaybackEvent};
use crate::render::Renderer;

use super::{GestureOutcome, HistogramEngine};

impl<P, A: HistogramAccessor<P>, R: Renderer> HistogramEngine<P, A, R> {
    /// Playback parameters for the current brushed window.
    ///
    /// `None` without data, before the first layout, or when the play
    /// control is disabled.
    #[must_use]
    pub fn playback_request(&self) -> Option<PlayRequest> {
        if self.data.is_empty() || !self.config.render_play_button {
            return None;
        }
        let layout = self.state.layout?;
        let selection = self.brush_selection()?;
        let width = layout.overview.width;
        Some(PlayRequest {
            frame_start: selection.start,
            play_end: width,
            step: width * self.config.frame_step,
            current_window_end: selection.end,
        })
    }

    /// Feeds a playback timer event back into the brush path.
    pub fn apply_playback_event(&mut self, event: PlaybackEvent) -> Option<GestureOutcome> {
        match event {
            PlaybackEvent::Frame(window) => self.apply_frame_window(window),
            PlaybackEvent::Finished => {
                trace!("playback finished");
                None
            }
        }
    }
}
