use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::error::{HistogramError, HistogramResult};

use super::{PixelRange, PlayRequest, PlaybackController, PlaybackState, PlaybackTick};

/// Event delivered to the playback sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Next overview window, to be fed back into the brush path.
    Frame(PixelRange),
    Finished,
}

#[derive(Debug, Default)]
struct SharedPlayback {
    controller: PlaybackController,
    /// Bumped on every play and stop so a superseded task goes quiet even if
    /// it wins the lock before its abort lands.
    generation: u64,
}

/// Drives a [`PlaybackController`] at a fixed cadence on the current tokio
/// runtime.
///
/// At most one ticking task exists per timer. The sink runs while the
/// controller lock is held, so once [`PlaybackTimer::stop`] returns no
/// further event is delivered.
#[derive(Debug, Default)]
pub struct PlaybackTimer {
    shared: Arc<Mutex<SharedPlayback>>,
    task: Option<JoinHandle<()>>,
}

impl PlaybackTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session and ticks it every `frame_delay`, first tick after
    /// one delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn play<F>(
        &mut self,
        request: PlayRequest,
        frame_delay: Duration,
        sink: F,
    ) -> HistogramResult<()>
    where
        F: FnMut(PlaybackEvent) + Send + 'static,
    {
        if frame_delay.is_zero() {
            return Err(HistogramError::InvalidConfig(
                "playback frame delay must be > 0".to_owned(),
            ));
        }
        let runtime = Handle::try_current().map_err(|err| {
            HistogramError::InvalidConfig(format!("playback timer needs a tokio runtime: {err}"))
        })?;

        let generation = {
            let mut shared = lock(&self.shared);
            shared.controller.play(request)?;
            shared.generation = shared.generation.wrapping_add(1);
            shared.generation
        };
        self.abort_task();

        debug!(
            frame_delay_ms = frame_delay.as_millis() as u64,
            generation, "playback timer started"
        );
        let shared = Arc::clone(&self.shared);
        self.task = Some(runtime.spawn(run_ticks(shared, generation, frame_delay, sink)));
        Ok(())
    }

    /// Stops the session and cancels the task; idempotent.
    pub fn stop(&mut self) -> bool {
        let was_playing = {
            let mut shared = lock(&self.shared);
            shared.generation = shared.generation.wrapping_add(1);
            shared.controller.stop()
        };
        self.abort_task();
        was_playing
    }

    /// Teardown hook; same as [`PlaybackTimer::stop`] without the result.
    pub fn shutdown(&mut self) {
        let _ = self.stop();
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        lock(&self.shared).controller.is_playing()
    }

    #[must_use]
    pub fn state(&self) -> Option<PlaybackState> {
        lock(&self.shared).controller.state()
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.abort_task();
    }
}

async fn run_ticks<F>(
    shared: Arc<Mutex<SharedPlayback>>,
    generation: u64,
    frame_delay: Duration,
    mut sink: F,
) where
    F: FnMut(PlaybackEvent) + Send + 'static,
{
    let mut ticker = time::interval_at(Instant::now() + frame_delay, frame_delay);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let keep_ticking = {
            let mut state = lock(&shared);
            if state.generation != generation {
                false
            } else {
                match state.controller.tick() {
                    PlaybackTick::Frame(window) => {
                        sink(PlaybackEvent::Frame(window));
                        true
                    }
                    PlaybackTick::Finished => {
                        sink(PlaybackEvent::Finished);
                        false
                    }
                    PlaybackTick::Idle => false,
                }
            }
        };
        if !keep_ticking {
            break;
        }
    }
}

fn lock(shared: &Mutex<SharedPlayback>) -> MutexGuard<'_, SharedPlayback> {
    shared.lock().unwrap_or_else(|poisoned| {
        warn!("playback state lock poisoned by a panicking sink, recovering");
        poisoned.into_inner()
    })
}
