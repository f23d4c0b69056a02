//! The default handler set, driven end to end.

use glam::DVec2;
use mapboard::{CameraTransform, HandlerManager, InputEvent, Key, KeyEvent, ManagerOptions, Modifiers};

use crate::helpers::{key_down, pointer_down, pointer_move, pointer_up, wheel, Harness};

fn default_harness() -> Harness {
    Harness::new(HandlerManager::with_default_handlers(ManagerOptions::default()))
}

#[test]
fn test_default_handlers_registered() {
    let manager = HandlerManager::with_default_handlers(ManagerOptions::default());
    for name in ["mouse_pan", "scroll_zoom", "keyboard"] {
        assert!(manager.is_handler_enabled(name).unwrap(), "{name}");
    }
}

#[test]
fn test_mouse_drag_pans_the_map() {
    let mut h = default_harness();
    h.dispatch(pointer_down(0.0, 200.0, 150.0));
    h.dispatch(pointer_move(16.0, 210.0, 150.0));
    assert!(h.tick());

    // Dragging right carries the content right, so the centered world
    // location moves west
    assert!(h.transform.center().x < 0.5);
    assert_eq!(h.host.count("dragstart"), 1);

    h.dispatch(pointer_up(40.0, 210.0, 150.0));
    h.settle();
    assert_eq!(h.host.count("dragend"), 1);
    assert_eq!(h.host.count("moveend"), 1);
}

#[test]
fn test_scroll_zoom_full_cycle() {
    let mut h = default_harness();
    let cursor = DVec2::new(200.0, 150.0);
    let pinned = h.transform.screen_to_world(cursor);

    // One notch of the wheel zoom rate is exactly one level
    let notch = wheel(0.0, cursor.x, cursor.y, -450.0);
    h.dispatch(notch.clone());
    h.settle();

    assert!((h.transform.zoom() - 1.0).abs() < 1e-9);
    assert!((h.transform.screen_to_world(cursor) - pinned).length() < 1e-9);

    assert_eq!(h.host.count("zoomstart"), 1);
    assert_eq!(h.host.count("zoomend"), 1);
    assert!(h.host.count("zoom") > 1, "smoothed over several frames");
    // Wheel zoom never flings
    assert!(h.host.eases.is_empty());
    assert_eq!(h.host.count("moveend"), 1);
    assert_eq!(h.host.attribution("zoomend"), Some(notch));
}

#[test]
fn test_keyboard_zoom_step_eases() {
    let mut h = default_harness();
    h.dispatch(key_down(0.0, Key::Plus));

    assert_eq!(h.host.eases.len(), 1);
    let target = &h.host.eases[0].0;
    assert_eq!(target.zoom, Some(1.0));
    assert_eq!(target.offset, None);
    assert_eq!(target.duration_ms, 300.0);
    // Discrete steps bypass the gesture pipeline entirely
    assert!(h.host.events.is_empty());
    assert_eq!(h.transform.zoom(), 0.0);
}

#[test]
fn test_keyboard_arrow_pans() {
    let mut h = default_harness();
    h.dispatch(key_down(0.0, Key::ArrowLeft));

    assert_eq!(h.host.eases.len(), 1);
    assert_eq!(h.host.eases[0].0.offset, Some(DVec2::new(100.0, 0.0)));
}

#[test]
fn test_modified_keys_pass_through() {
    let mut h = default_harness();
    h.dispatch(InputEvent::KeyDown(KeyEvent {
        time: 0.0,
        key: Key::ArrowUp,
        modifiers: Modifiers {
            control: true,
            ..Default::default()
        },
    }));
    assert!(h.host.eases.is_empty());
}
