//! Button-drag panning.

use crate::event::PointerEvent;
use crate::handler::{Handler, HandlerResult};
use crate::types::{MouseButton, ScreenPoint};

/// Pans the camera while the left button drags, emitting the pointer delta
/// since the previous move as a pan delta.
pub struct MousePanHandler {
    enabled: bool,
    /// Last pointer position while a drag is in progress.
    last_position: Option<ScreenPoint>,
}

impl MousePanHandler {
    /// Registration name.
    pub const NAME: &'static str = "mouse_pan";

    pub fn new() -> Self {
        Self {
            enabled: true,
            last_position: None,
        }
    }
}

impl Default for MousePanHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for MousePanHandler {
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
        self.last_position.is_some()
    }

    fn reset(&mut self) {
        self.last_position = None;
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        if event.button == MouseButton::Left {
            self.last_position = Some(event.position);
        }
        None
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        let last = self.last_position?;
        let delta = event.position - last;
        self.last_position = Some(event.position);
        Some(HandlerResult::pan(delta))
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        if event.button == MouseButton::Left {
            self.last_position = None;
        }
        None
    }
}
