//! Frame-request deduplication, stale callbacks and the animation bypass.

use glam::DVec2;
use mapboard::handlers::KeyboardHandler;
use mapboard::{CameraTransform, HandlerManager, Key, ManagerOptions, MapTransform};

use crate::helpers::{
    key_down, pointer_down, pointer_move, Harness, StubHandler, StubResponse,
};

fn pan_manager() -> HandlerManager {
    let mut manager = HandlerManager::new(ManagerOptions::default());
    manager
        .add_handler(
            "pan",
            Box::new(StubHandler::new(StubResponse::pan(5.0, 0.0))),
            vec![],
        )
        .unwrap();
    manager
}

#[test]
fn test_frame_requests_deduplicated() {
    // The recording host additionally asserts that no second request
    // arrives while one is outstanding.
    let mut h = Harness::new(pan_manager());
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(4.0, 105.0, 100.0));
    h.dispatch(pointer_move(8.0, 110.0, 100.0));
    h.dispatch(pointer_move(12.0, 115.0, 100.0));
    assert_eq!(h.host.frame_requests, 1);

    assert!(h.tick());
    assert!(!h.tick(), "settled, no further frames requested");
    assert_eq!(h.host.frame_requests, 1);
}

#[test]
fn test_stale_frame_after_stop_is_noop() {
    let mut h = Harness::new(pan_manager());
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 110.0, 100.0));
    h.manager.stop();

    // The frame requested before stop() still fires
    assert!(h.tick());
    assert_eq!(h.transform, MapTransform::default());
    assert_eq!(h.host.renders, 0);
    assert!(h.host.events.is_empty());
}

#[test]
fn test_camera_animation_discards_queued_changes() {
    let mut manager = pan_manager();
    manager
        .add_handler(
            KeyboardHandler::NAME,
            Box::new(KeyboardHandler::new()),
            vec!["pan".to_string()],
        )
        .unwrap();
    let mut h = Harness::new(manager);

    // Queue a pan, then hit a key before the frame fires
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 110.0, 100.0));
    h.dispatch(key_down(20.0, Key::Plus));
    h.settle();

    assert_eq!(h.host.eases.len(), 1);
    assert_eq!(h.host.eases[0].0.zoom, Some(1.0));
    // The queued pan never reached the camera
    assert_eq!(h.transform.center(), DVec2::new(0.5, 0.5));
    assert_eq!(h.host.count("movestart"), 0);
}

#[test]
fn test_gesture_cancels_programmatic_animation() {
    let mut h = Harness::new(pan_manager());
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    let after_down = h.host.cancels;
    assert!(after_down >= 1, "engaging a gesture preempts animations");
    h.dispatch(pointer_move(16.0, 110.0, 100.0));
    assert!(h.host.cancels > after_down);
}
