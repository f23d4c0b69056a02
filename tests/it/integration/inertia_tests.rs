//! Post-gesture inertia and the bearing snap.

use mapboard::{CameraTransform, HandlerManager, ManagerOptions};

use crate::helpers::{
    pointer_down, pointer_move, pointer_up, Harness, StubHandler, StubResponse, FRAME_MS,
};

fn single(stub: StubHandler) -> Harness {
    let mut manager = HandlerManager::new(ManagerOptions::default());
    manager.add_handler("stub", Box::new(stub), vec![]).unwrap();
    Harness::new(manager)
}

/// Drive a steady six-frame drag: move, frame, move, frame...
fn steady_drag(h: &mut Harness) {
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    for i in 1..=6 {
        h.dispatch(pointer_move(i as f64 * FRAME_MS, 100.0 + i as f64 * 40.0, 100.0));
        assert!(h.tick());
    }
}

#[test]
fn test_fast_release_eases_instead_of_moveend() {
    let mut h = single(StubHandler::new(StubResponse::pan(40.0, 0.0)));
    steady_drag(&mut h);
    let up = pointer_up(120.0, 340.0, 100.0);
    h.dispatch(up.clone());
    h.settle();

    assert_eq!(h.host.eases.len(), 1);
    let (target, originating) = &h.host.eases[0];
    let offset = target.offset.unwrap();
    // 240px over 80ms, scaled by linearity 0.3: v = 900 px/s, decelerating
    // at 2500 * 0.3 px/s^2 for 1.2s travels 540px
    assert!((offset.x - 540.0).abs() < 1e-6);
    assert_eq!(offset.y, 0.0);
    assert!((target.duration_ms - 1200.0).abs() < 1e-6);
    assert_eq!(originating.as_ref(), Some(&up));

    // The ease owns the eventual moveend
    assert_eq!(h.host.count("moveend"), 0);
    assert_eq!(h.host.count("dragend"), 1);
}

#[test]
fn test_no_inertia_flag_forces_plain_settle() {
    let response = StubResponse {
        no_inertia: true,
        ..StubResponse::pan(40.0, 0.0)
    };
    let mut h = single(StubHandler::new(response));
    steady_drag(&mut h);
    h.dispatch(pointer_up(120.0, 340.0, 100.0));
    h.settle();

    assert!(h.host.eases.is_empty());
    assert_eq!(h.host.count("moveend"), 1);
}

#[test]
fn test_slow_release_settles_plainly() {
    let mut h = single(StubHandler::new(StubResponse::pan(0.1, 0.0)));
    steady_drag(&mut h);
    h.dispatch(pointer_up(120.0, 100.6, 100.0));
    h.settle();

    assert!(h.host.eases.is_empty());
    assert_eq!(h.host.count("moveend"), 1);
}

#[test]
fn test_ease_bearing_target_snaps_to_north() {
    let mut h = single(StubHandler::new(StubResponse::bearing(0.5)));
    steady_drag(&mut h);
    h.dispatch(pointer_up(120.0, 340.0, 100.0));
    h.settle();

    // Released at 3 degrees with a small angular velocity: the decelerated
    // end bearing is still inside the snap tolerance
    assert_eq!(h.host.eases.len(), 1);
    assert_eq!(h.host.eases[0].0.bearing, Some(0.0));
}

#[test]
fn test_plain_settle_near_north_resets() {
    let response = StubResponse {
        no_inertia: true,
        ..StubResponse::bearing(3.0)
    };
    let mut h = single(StubHandler::new(response));
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 105.0, 100.0));
    assert!(h.tick());
    h.dispatch(pointer_up(40.0, 105.0, 100.0));
    h.settle();

    assert_eq!(h.transform.bearing(), 3.0);
    assert_eq!(h.host.count("moveend"), 1);
    assert_eq!(h.host.reset_norths, 1, "host animates the bearing home");
}

#[test]
fn test_settle_far_from_north_keeps_bearing() {
    let response = StubResponse {
        no_inertia: true,
        ..StubResponse::bearing(30.0)
    };
    let mut h = single(StubHandler::new(response));
    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 105.0, 100.0));
    assert!(h.tick());
    h.dispatch(pointer_up(40.0, 105.0, 100.0));
    h.settle();

    assert_eq!(h.transform.bearing(), 30.0);
    assert_eq!(h.host.reset_norths, 0);
}

#[test]
fn test_new_gesture_discards_previous_samples() {
    let mut h = single(StubHandler::new(StubResponse::pan(40.0, 0.0)));
    steady_drag(&mut h);
    h.dispatch(pointer_up(120.0, 340.0, 100.0));
    h.settle();
    assert_eq!(h.host.eases.len(), 1);

    // A short follow-up drag with a single recorded frame must not
    // inherit the first drag's velocity
    let t0 = h.now;
    h.dispatch(pointer_down(t0 + 10.0, 100.0, 100.0));
    h.dispatch(pointer_move(t0 + 20.0, 100.0, 100.0));
    assert!(h.tick());
    h.dispatch(pointer_up(t0 + 40.0, 100.0, 100.0));
    h.settle();

    assert_eq!(h.host.eases.len(), 1);
    assert_eq!(h.host.count("moveend"), 1);
}
