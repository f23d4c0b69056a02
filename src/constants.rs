//! Engine-wide constants.
//!
//! Centralizes magic numbers for gesture handling, inertia and camera limits
//! to make the codebase more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level accepted by [`crate::transform::MapTransform`]
pub const MIN_ZOOM: f64 = 0.0;

/// Maximum zoom level accepted by [`crate::transform::MapTransform`]
pub const MAX_ZOOM: f64 = 22.0;

/// Default zoom level for a fresh transform
pub const DEFAULT_ZOOM: f64 = 0.0;

/// World-plane scale at zoom 0 (each zoom level doubles it)
pub const TILE_SIZE: f64 = 512.0;

/// Screen-pixel pan applied per keyboard arrow press
pub const KEYBOARD_PAN_STEP: f64 = 100.0;

/// Zoom delta applied per keyboard +/- press
pub const KEYBOARD_ZOOM_STEP: f64 = 1.0;

/// Duration of keyboard-driven camera animations in milliseconds
pub const KEYBOARD_EASE_DURATION_MS: f64 = 300.0;

/// Fraction of the remaining smoothed wheel-zoom target applied per frame
pub const WHEEL_SMOOTHING_RATE: f64 = 0.25;

/// Remaining wheel-zoom below this is applied in full and the gesture settles
pub const WHEEL_SETTLE_THRESHOLD: f64 = 0.001;

/// Wheel delta to zoom-delta conversion divisor (pixels per zoom level)
pub const WHEEL_ZOOM_RATE: f64 = 450.0;

// ============================================================================
// Bearing Snap
// ============================================================================

/// Final bearings within this many degrees of north snap to exactly 0
pub const DEFAULT_BEARING_SNAP: f64 = 7.0;

// ============================================================================
// Inertia
// ============================================================================

/// Samples older than this (milliseconds) are ignored at gesture end
pub const INERTIA_HORIZON_MS: f64 = 160.0;

/// Maximum number of retained inertia samples
pub const INERTIA_MAX_SAMPLES: usize = 20;

/// Scales estimated gesture velocity before deceleration is applied
pub const INERTIA_LINEARITY: f64 = 0.3;

/// Maximum pan fling speed in screen pixels per second
pub const INERTIA_PAN_MAX_SPEED: f64 = 1400.0;

/// Pan fling deceleration in pixels per second squared
pub const INERTIA_PAN_DECELERATION: f64 = 2500.0;

/// Maximum zoom fling speed in zoom levels per second
pub const INERTIA_ZOOM_MAX_SPEED: f64 = 2.5;

/// Zoom fling deceleration in levels per second squared
pub const INERTIA_ZOOM_DECELERATION: f64 = 20.0;

/// Maximum bearing fling speed in degrees per second
pub const INERTIA_BEARING_MAX_SPEED: f64 = 180.0;

/// Bearing fling deceleration in degrees per second squared
pub const INERTIA_BEARING_DECELERATION: f64 = 1000.0;

/// Maximum pitch fling speed in degrees per second
pub const INERTIA_PITCH_MAX_SPEED: f64 = 90.0;

/// Pitch fling deceleration in degrees per second squared
pub const INERTIA_PITCH_DECELERATION: f64 = 1000.0;

/// Estimated speeds below this fraction of the configured max produce no fling
pub const INERTIA_MIN_SPEED_RATIO: f64 = 0.01;

// ============================================================================
// Viewport Defaults
// ============================================================================

/// Default viewport width in pixels for a fresh transform
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// Default viewport height in pixels for a fresh transform
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 768.0;

/// Maximum pitch in degrees
pub const MAX_PITCH: f64 = 60.0;
