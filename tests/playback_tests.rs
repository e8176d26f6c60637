use histogram_rs::HistogramError;
use histogram_rs::interaction::{PixelRange, PlayRequest, PlaybackController, PlaybackTick};

fn request(current_window_end: f64) -> PlayRequest {
    PlayRequest {
        frame_start: 0.0,
        play_end: 1000.0,
        step: 100.0,
        current_window_end,
    }
}

fn drain(controller: &mut PlaybackController) -> Vec<f64> {
    let mut ends = Vec::new();
    loop {
        match controller.tick() {
            PlaybackTick::Frame(window) => {
                assert_eq!(window.start, 0.0);
                ends.push(window.end);
            }
            PlaybackTick::Finished => return ends,
            PlaybackTick::Idle => panic!("session ended without finishing"),
        }
    }
}

#[test]
fn collapsed_window_grows_to_play_end() {
    let mut controller = PlaybackController::new();
    controller.play(request(0.0)).expect("play");

    let ends = drain(&mut controller);
    let expected: Vec<f64> = (1..=10).map(|i| f64::from(i) * 100.0).collect();
    assert_eq!(ends, expected);

    assert!(!controller.is_playing());
    assert_eq!(controller.tick(), PlaybackTick::Idle);
}

#[test]
fn window_at_play_end_replays_from_start() {
    let mut controller = PlaybackController::new();
    controller.play(request(1000.0)).expect("play");

    assert_eq!(
        controller.tick(),
        PlaybackTick::Frame(PixelRange::new(0.0, 100.0))
    );
}

#[test]
fn partial_window_continues_from_its_end() {
    let mut controller = PlaybackController::new();
    controller.play(request(650.0)).expect("play");

    assert_eq!(controller.state().map(|state| state.frame_end), Some(650.0));
    let ends = drain(&mut controller);
    assert_eq!(ends, vec![750.0, 850.0, 950.0, 1000.0]);
}

#[test]
fn last_frame_is_clamped_to_play_end() {
    let mut controller = PlaybackController::new();
    controller
        .play(PlayRequest {
            step: 300.0,
            ..request(0.0)
        })
        .expect("play");

    assert_eq!(drain(&mut controller), vec![300.0, 600.0, 900.0, 1000.0]);
}

#[test]
fn stop_is_idempotent() {
    let mut controller = PlaybackController::new();
    controller.play(request(0.0)).expect("play");
    let _ = controller.tick();

    assert!(controller.stop());
    assert!(!controller.stop());
    assert_eq!(controller.state(), None);
    assert_eq!(controller.tick(), PlaybackTick::Idle);
}

#[test]
fn play_replaces_active_session() {
    let mut controller = PlaybackController::new();
    controller.play(request(0.0)).expect("play");
    let _ = controller.tick();
    let _ = controller.tick();

    controller.play(request(900.0)).expect("replay");
    assert_eq!(
        controller.tick(),
        PlaybackTick::Frame(PixelRange::new(0.0, 1000.0))
    );
}

#[test]
fn invalid_requests_are_rejected() {
    let mut controller = PlaybackController::new();

    let zero_step = controller.play(PlayRequest {
        step: 0.0,
        ..request(0.0)
    });
    assert!(matches!(zero_step, Err(HistogramError::InvalidData(_))));

    let nan_end = controller.play(PlayRequest {
        play_end: f64::NAN,
        ..request(0.0)
    });
    assert!(matches!(nan_end, Err(HistogramError::InvalidData(_))));
    assert!(!controller.is_playing());
}
