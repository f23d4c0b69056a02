//! Keyboard camera steps.
//!
//! Discrete key presses become short programmatic animations through the
//! camera-animation bypass rather than incremental deltas: a keyboard step
//! has no gesture velocity worth tracking, so it goes straight to
//! [`crate::host::MapHost::ease_to`].

use crate::constants::{KEYBOARD_EASE_DURATION_MS, KEYBOARD_PAN_STEP, KEYBOARD_ZOOM_STEP};
use crate::event::KeyEvent;
use crate::handler::{Handler, HandlerResult};
use crate::host::EaseTarget;
use crate::types::Key;
use glam::DVec2;

pub struct KeyboardHandler {
    enabled: bool,
}

impl KeyboardHandler {
    /// Registration name.
    pub const NAME: &'static str = "keyboard";

    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for KeyboardHandler {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_active(&self) -> bool {
        false
    }

    fn reset(&mut self) {}

    fn key_down(&mut self, event: &KeyEvent) -> Option<HandlerResult> {
        if event.modifiers != Default::default() {
            return None;
        }
        // Pan deltas move the content with the pointer, so panning the view
        // right means a negative-x content offset
        let (offset, zoom_step) = match event.key {
            Key::ArrowLeft => (Some(DVec2::new(KEYBOARD_PAN_STEP, 0.0)), 0.0),
            Key::ArrowRight => (Some(DVec2::new(-KEYBOARD_PAN_STEP, 0.0)), 0.0),
            Key::ArrowUp => (Some(DVec2::new(0.0, KEYBOARD_PAN_STEP)), 0.0),
            Key::ArrowDown => (Some(DVec2::new(0.0, -KEYBOARD_PAN_STEP)), 0.0),
            Key::Plus => (None, KEYBOARD_ZOOM_STEP),
            Key::Minus => (None, -KEYBOARD_ZOOM_STEP),
            _ => return None,
        };
        Some(HandlerResult::animation(Box::new(
            move |transform, host| {
                let target = EaseTarget {
                    offset,
                    zoom: (zoom_step != 0.0).then(|| transform.zoom() + zoom_step),
                    bearing: None,
                    pitch: None,
                    duration_ms: KEYBOARD_EASE_DURATION_MS,
                };
                host.ease_to(target, None);
            },
        )))
    }
}
