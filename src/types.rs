//! Core types shared across the interaction system.
//!
//! This module defines the fundamental value types used throughout the crate:
//! screen/world points, gesture categories, and the button/key/modifier types
//! carried by input events.

use serde::{Deserialize, Serialize};

/// A point or delta in viewport-relative screen pixels.
pub type ScreenPoint = glam::DVec2;

/// A location on the world plane (scale-independent map units).
pub type WorldPoint = glam::DVec2;

/// Millisecond timestamp attached to every input event.
///
/// The origin is arbitrary (embedders typically use a monotonic clock);
/// only deltas between timestamps are ever interpreted.
pub type Timestamp = f64;

// ============================================================================
// Gesture Categories
// ============================================================================

/// One independently trackable axis of camera change.
///
/// At most one handler may own a category at a time; ownership is tracked by
/// the manager while a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GestureCategory {
    /// Camera translation. Fires publicly as `drag`.
    Pan,
    /// Camera scale change.
    Zoom,
    /// Camera rotation around the view axis.
    Rotate,
    /// Camera tilt.
    Pitch,
}

impl GestureCategory {
    /// All categories in a fixed order, used when deriving lifecycle events.
    pub const ALL: [GestureCategory; 4] = [
        GestureCategory::Pan,
        GestureCategory::Zoom,
        GestureCategory::Rotate,
        GestureCategory::Pitch,
    ];

    /// Public notification prefix for this category (`Pan` fires as `drag`).
    pub fn event_prefix(self) -> &'static str {
        match self {
            GestureCategory::Pan => "drag",
            GestureCategory::Zoom => "zoom",
            GestureCategory::Rotate => "rotate",
            GestureCategory::Pitch => "pitch",
        }
    }

    /// Notification fired when this category's gesture begins.
    pub fn start_event_name(self) -> &'static str {
        match self {
            GestureCategory::Pan => "dragstart",
            GestureCategory::Zoom => "zoomstart",
            GestureCategory::Rotate => "rotatestart",
            GestureCategory::Pitch => "pitchstart",
        }
    }

    /// Notification fired for each change while the gesture is in progress.
    pub fn change_event_name(self) -> &'static str {
        self.event_prefix()
    }

    /// Notification fired when this category's gesture ends.
    pub fn end_event_name(self) -> &'static str {
        match self {
            GestureCategory::Pan => "dragend",
            GestureCategory::Zoom => "zoomend",
            GestureCategory::Rotate => "rotateend",
            GestureCategory::Pitch => "pitchend",
        }
    }
}

// ============================================================================
// Buttons, Keys, Modifiers
// ============================================================================

/// Mouse button carried by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Normalized key identity for keyboard events.
///
/// Only keys the shipped handlers care about get their own variant; anything
/// else arrives as `Other` so embedders can still route it to custom handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Plus,
    Minus,
    Other(String),
}

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Platform key (Command on macOS, Windows key elsewhere)
    pub platform: bool,
}
