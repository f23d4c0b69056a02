//! Normalized input events dispatched to gesture handlers.
//!
//! The platform layer (winit, a browser shim, a test script) normalizes raw
//! events into these variants before handing them to the manager. Every
//! variant carries a required millisecond timestamp; inertia math is
//! meaningless without one, so its absence is unrepresentable rather than
//! asserted at runtime.

use crate::types::{Key, Modifiers, MouseButton, ScreenPoint, Timestamp};

/// A pointer (mouse) event with a single position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub time: Timestamp,
    pub position: ScreenPoint,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

/// A touch event carrying every active touch point.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub time: Timestamp,
    pub touches: Vec<ScreenPoint>,
}

/// A scroll-wheel event. `delta` is in pixels (positive scrolls away).
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    pub time: Timestamp,
    pub position: ScreenPoint,
    pub delta: f64,
    pub modifiers: Modifiers,
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub time: Timestamp,
    pub key: Key,
    pub modifiers: Modifiers,
}

/// One normalized input event, tagged by kind.
///
/// Handlers receive the payload matching their declared callback; the
/// `RenderFrame` tick is synthesized by the manager once per rendering frame
/// so that time-based handlers can keep emitting deltas without new input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    DoubleClick(PointerEvent),
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    TouchCancel(TouchEvent),
    Wheel(WheelEvent),
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    RenderFrame { time: Timestamp },
}

impl InputEvent {
    /// Timestamp of this event in milliseconds.
    pub fn time(&self) -> Timestamp {
        match self {
            InputEvent::PointerDown(e)
            | InputEvent::PointerMove(e)
            | InputEvent::PointerUp(e)
            | InputEvent::DoubleClick(e) => e.time,
            InputEvent::TouchStart(e)
            | InputEvent::TouchMove(e)
            | InputEvent::TouchEnd(e)
            | InputEvent::TouchCancel(e) => e.time,
            InputEvent::Wheel(e) => e.time,
            InputEvent::KeyDown(e) | InputEvent::KeyUp(e) => e.time,
            InputEvent::RenderFrame { time } => *time,
        }
    }

    /// Viewport position(s) associated with this event, if any.
    pub fn points(&self) -> Vec<ScreenPoint> {
        match self {
            InputEvent::PointerDown(e)
            | InputEvent::PointerMove(e)
            | InputEvent::PointerUp(e)
            | InputEvent::DoubleClick(e) => vec![e.position],
            InputEvent::TouchStart(e)
            | InputEvent::TouchMove(e)
            | InputEvent::TouchEnd(e)
            | InputEvent::TouchCancel(e) => e.touches.clone(),
            InputEvent::Wheel(e) => vec![e.position],
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) | InputEvent::RenderFrame { .. } => {
                Vec::new()
            }
        }
    }

    /// Short kind name used in trace logging.
    pub fn kind(&self) -> &'static str {
        match self {
            InputEvent::PointerDown(_) => "pointer_down",
            InputEvent::PointerMove(_) => "pointer_move",
            InputEvent::PointerUp(_) => "pointer_up",
            InputEvent::DoubleClick(_) => "double_click",
            InputEvent::TouchStart(_) => "touch_start",
            InputEvent::TouchMove(_) => "touch_move",
            InputEvent::TouchEnd(_) => "touch_end",
            InputEvent::TouchCancel(_) => "touch_cancel",
            InputEvent::Wheel(_) => "wheel",
            InputEvent::KeyDown(_) => "key_down",
            InputEvent::KeyUp(_) => "key_up",
            InputEvent::RenderFrame { .. } => "render_frame",
        }
    }
}
