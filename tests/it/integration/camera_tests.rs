//! Frame coalescing and the anchor-preserving camera update.

use glam::DVec2;
use mapboard::{CameraTransform, HandlerManager, ManagerOptions};

use crate::helpers::{pointer_down, pointer_move, Harness, StubHandler, StubResponse};

fn single(response: StubResponse) -> Harness {
    let mut manager = HandlerManager::new(ManagerOptions::default());
    manager
        .add_handler("stub", Box::new(StubHandler::new(response)), vec![])
        .unwrap();
    Harness::new(manager)
}

fn approx(a: DVec2, b: DVec2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn test_pan_deltas_sum_across_dispatches() {
    let mut h = single(StubResponse::pan(5.0, 0.0));
    let vc = h.transform.viewport_center();
    // Three queued moves coalesce into one 15px update
    let expected = h.transform.screen_to_world(vc - DVec2::new(15.0, 0.0));

    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(4.0, 105.0, 100.0));
    h.dispatch(pointer_move(8.0, 110.0, 100.0));
    h.dispatch(pointer_move(12.0, 115.0, 100.0));
    assert!(h.tick());

    assert!(approx(h.transform.screen_to_world(vc), expected));
    assert_eq!(h.host.renders, 1, "one camera update per frame");
}

#[test]
fn test_zoom_preserves_anchor() {
    let anchor = DVec2::new(200.0, 150.0);
    let mut h = single(StubResponse::zoom(0.5, anchor));
    let pinned = h.transform.screen_to_world(anchor);

    h.dispatch(pointer_down(0.0, 200.0, 150.0));
    h.dispatch(pointer_move(16.0, 200.0, 150.0));
    assert!(h.tick());

    assert_eq!(h.transform.zoom(), 0.5);
    assert!(approx(h.transform.screen_to_world(anchor), pinned));
}

#[test]
fn test_pinch_anchor_overrides_around() {
    let response = StubResponse {
        zoom_delta: Some(1.0),
        around: Some(DVec2::new(100.0, 100.0)),
        pinch_around: Some(DVec2::new(300.0, 200.0)),
        ..Default::default()
    };
    let mut h = single(response);
    let pinned = h.transform.screen_to_world(DVec2::new(300.0, 200.0));
    let unpinned = h.transform.screen_to_world(DVec2::new(100.0, 100.0));

    h.dispatch(pointer_down(0.0, 300.0, 200.0));
    h.dispatch(pointer_move(16.0, 300.0, 200.0));
    assert!(h.tick());

    assert!(approx(h.transform.screen_to_world(DVec2::new(300.0, 200.0)), pinned));
    assert!(!approx(h.transform.screen_to_world(DVec2::new(100.0, 100.0)), unpinned));
}

#[test]
fn test_rotation_defaults_to_viewport_center_anchor() {
    let mut h = single(StubResponse::bearing(30.0));
    let center_before = h.transform.center();

    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 120.0, 100.0));
    assert!(h.tick());

    assert_eq!(h.transform.bearing(), 30.0);
    assert!(approx(h.transform.center(), center_before));
}

#[test]
fn test_zero_delta_claims_category_without_camera_change() {
    let response = StubResponse {
        zoom_delta: Some(0.0),
        ..Default::default()
    };
    let mut h = single(response);

    h.dispatch(pointer_down(0.0, 100.0, 100.0));
    h.dispatch(pointer_move(16.0, 100.0, 100.0));
    assert!(h.tick());

    // The category bracket opens, but the camera never moves
    assert_eq!(h.host.event_names(), vec!["movestart", "zoomstart", "move", "zoom"]);
    assert_eq!(h.host.renders, 0);
    assert_eq!(h.transform.zoom(), 0.0);
}

#[test]
fn test_combined_pan_and_zoom_single_update() {
    let response = StubResponse {
        pan_delta: Some(DVec2::new(10.0, 0.0)),
        zoom_delta: Some(0.25),
        around: Some(DVec2::new(200.0, 150.0)),
        ..Default::default()
    };
    let mut h = single(response);

    h.dispatch(pointer_down(0.0, 200.0, 150.0));
    h.dispatch(pointer_move(16.0, 210.0, 150.0));
    assert!(h.tick());

    assert_eq!(h.transform.zoom(), 0.25);
    assert_eq!(h.host.renders, 1);
    assert_eq!(h.host.count("drag"), 1);
    assert_eq!(h.host.count("zoom"), 1);
}
