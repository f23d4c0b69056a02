//! Gesture handler capability interface and registry.
//!
//! A handler is one gesture recognizer: it observes the normalized event
//! stream and reports camera deltas through [`HandlerResult`]. Handlers never
//! touch the camera directly; the manager merges their results, coalesces
//! them per frame, and applies them while preserving the anchor invariant.
//!
//! ## Modules
//!
//! - `result` - The value type every recognizer returns
//! - `registry` - Ordered named handlers with coexistence allow-lists

mod registry;
mod result;

pub use registry::{HandlerEntry, HandlerRegistry};
pub use result::{CameraAnimation, HandlerResult};

use crate::event::{KeyEvent, PointerEvent, TouchEvent, WheelEvent};
use crate::types::Timestamp;

/// Capability interface implemented by every gesture recognizer.
///
/// The per-event callbacks default to no reaction; a recognizer overrides
/// only the kinds it understands. Returning `Some` marks the handler active
/// for the current dispatch even if the result carries no delta; a handler
/// that holds gesture state between events additionally reports it through
/// [`Handler::is_active`].
pub trait Handler {
    fn enable(&mut self);
    fn disable(&mut self);
    fn is_enabled(&self) -> bool;

    /// True while the handler holds in-progress gesture state.
    fn is_active(&self) -> bool;

    /// Clear all in-progress gesture state. Called when the handler is
    /// blocked by a conflicting active handler and on [`crate::manager::HandlerManager::stop`].
    fn reset(&mut self);

    fn pointer_down(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn double_click(&mut self, event: &PointerEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn touch_start(&mut self, event: &TouchEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn touch_move(&mut self, event: &TouchEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn touch_end(&mut self, event: &TouchEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn touch_cancel(&mut self, event: &TouchEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn wheel(&mut self, event: &WheelEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn key_down(&mut self, event: &KeyEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    fn key_up(&mut self, event: &KeyEvent) -> Option<HandlerResult> {
        let _ = event;
        None
    }

    /// Synthetic per-frame tick, dispatched once per rendering frame while
    /// any change is pending. Lets time-based handlers keep emitting deltas
    /// with no new input.
    fn render_frame(&mut self, time: Timestamp) -> Option<HandlerResult> {
        let _ = time;
        None
    }
}
