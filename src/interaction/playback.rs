use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{HistogramError, HistogramResult};

use super::PixelRange;

/// Parameters of one playback session, all in overview pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayRequest {
    /// Left edge of the brushed window; stays fixed while playing.
    pub frame_start: f64,
    pub play_end: f64,
    pub step: f64,
    /// Right edge of the brushed window when play was pressed.
    pub current_window_end: f64,
}

impl PlayRequest {
    fn validate(self) -> HistogramResult<Self> {
        for (name, value) in [
            ("frame_start", self.frame_start),
            ("play_end", self.play_end),
            ("step", self.step),
            ("current_window_end", self.current_window_end),
        ] {
            if !value.is_finite() {
                return Err(HistogramError::InvalidData(format!(
                    "playback `{name}` must be finite"
                )));
            }
        }
        if self.step <= 0.0 {
            return Err(HistogramError::InvalidData(
                "playback step must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Public playback state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Right edge of the last emitted frame.
    pub frame_end: f64,
}

/// Outcome of one playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackTick {
    /// Window to show next, `[frame_start, frame_end]`.
    Frame(PixelRange),
    /// The session reached `play_end` and stopped itself.
    Finished,
    /// No session is active.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PlaybackSession {
    request: PlayRequest,
    frame_end: f64,
}

/// Time-lapse state machine growing the brushed window towards `play_end`.
///
/// Ticks are driven externally, see `PlaybackTimer` for the tokio-backed
/// cadence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackController {
    session: Option<PlaybackSession>,
}

impl PlaybackController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session, replacing any active one.
    ///
    /// A window already reaching `play_end` (or collapsed onto its start)
    /// replays from `frame_start`; otherwise playback continues from the
    /// current window end.
    pub fn play(&mut self, request: PlayRequest) -> HistogramResult<()> {
        let request = request.validate()?;
        let frame_end = if request.current_window_end == request.play_end
            || request.current_window_end == request.frame_start
        {
            request.frame_start
        } else {
            request.current_window_end
        };
        debug!(
            frame_start = request.frame_start,
            frame_end,
            play_end = request.play_end,
            step = request.step,
            "playback started"
        );
        self.session = Some(PlaybackSession { request, frame_end });
        Ok(())
    }

    pub fn tick(&mut self) -> PlaybackTick {
        let Some(session) = self.session.as_mut() else {
            return PlaybackTick::Idle;
        };
        let PlayRequest {
            frame_start,
            play_end,
            step,
            ..
        } = session.request;

        if session.frame_end >= play_end {
            self.session = None;
            debug!(play_end, "playback finished");
            return PlaybackTick::Finished;
        }

        session.frame_end = (session.frame_end + step).min(play_end);
        trace!(frame_start, frame_end = session.frame_end, "playback frame");
        PlaybackTick::Frame(PixelRange::new(frame_start, session.frame_end))
    }

    /// Ends the active session; returns whether one was active.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.session.take().is_some();
        if was_playing {
            debug!("playback stopped");
        }
        was_playing
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<PlaybackState> {
        self.session.map(|session| PlaybackState {
            is_playing: true,
            frame_end: session.frame_end,
        })
    }
}
