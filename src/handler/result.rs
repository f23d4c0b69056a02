//! The value type gesture recognizers return.

use crate::event::InputEvent;
use crate::host::MapHost;
use crate::transform::CameraTransform;
use crate::types::{GestureCategory, ScreenPoint};

/// Direct camera mutation that bypasses delta accumulation entirely.
///
/// Used by discrete gestures (keyboard steps, double-click zoom) that want a
/// programmatic animation instead of incremental deltas. When a dispatch
/// produces one, pending changes and inertia samples are discarded and the
/// callback runs immediately.
pub type CameraAnimation = Box<dyn FnOnce(&mut dyn CameraTransform, &mut dyn MapHost)>;

/// Camera changes contributed by one handler for one event.
///
/// Missing fields mean "no contribution", never zero: an explicit zero delta
/// still claims ownership of its gesture category while contributing nothing
/// numerically.
#[derive(Default)]
pub struct HandlerResult {
    /// Viewport translation in screen pixels.
    pub pan_delta: Option<ScreenPoint>,
    /// Additive zoom level change.
    pub zoom_delta: Option<f64>,
    /// Additive bearing change in degrees.
    pub bearing_delta: Option<f64>,
    /// Additive pitch change in degrees.
    pub pitch_delta: Option<f64>,
    /// Screen point whose world location must stay fixed across the update.
    pub around: Option<ScreenPoint>,
    /// Two-finger anchor; takes priority over `around` when both are present.
    pub pinch_around: Option<ScreenPoint>,
    /// Direct camera mutation bypassing delta accumulation.
    pub camera_animation: Option<CameraAnimation>,
    /// Overrides the dispatch event for lifecycle attribution.
    pub original_event: Option<InputEvent>,
    /// Ask for a render-frame tick even if nothing else changed.
    pub needs_render_frame: bool,
    /// Exclude this gesture from post-release inertial motion.
    pub no_inertia: bool,
}

impl std::fmt::Debug for HandlerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerResult")
            .field("pan_delta", &self.pan_delta)
            .field("zoom_delta", &self.zoom_delta)
            .field("bearing_delta", &self.bearing_delta)
            .field("pitch_delta", &self.pitch_delta)
            .field("around", &self.around)
            .field("pinch_around", &self.pinch_around)
            .field("camera_animation", &self.camera_animation.is_some())
            .field("needs_render_frame", &self.needs_render_frame)
            .field("no_inertia", &self.no_inertia)
            .finish()
    }
}

impl HandlerResult {
    /// A pan-only result.
    pub fn pan(delta: ScreenPoint) -> Self {
        Self {
            pan_delta: Some(delta),
            ..Default::default()
        }
    }

    /// A zoom-only result anchored at `around`.
    pub fn zoom(delta: f64, around: ScreenPoint) -> Self {
        Self {
            zoom_delta: Some(delta),
            around: Some(around),
            ..Default::default()
        }
    }

    /// A camera-animation result.
    pub fn animation(animation: CameraAnimation) -> Self {
        Self {
            camera_animation: Some(animation),
            ..Default::default()
        }
    }

    /// Gesture categories this result claims ownership of.
    ///
    /// Present-but-zero deltas count; absent fields do not.
    pub fn categories(&self) -> impl Iterator<Item = GestureCategory> + '_ {
        GestureCategory::ALL.into_iter().filter(|cat| match cat {
            GestureCategory::Pan => self.pan_delta.is_some(),
            GestureCategory::Zoom => self.zoom_delta.is_some(),
            GestureCategory::Rotate => self.bearing_delta.is_some(),
            GestureCategory::Pitch => self.pitch_delta.is_some(),
        })
    }

    /// True if applying this result would actually move the camera.
    ///
    /// An explicit zero delta claims category ownership but is not a change.
    pub fn has_camera_change(&self) -> bool {
        self.pan_delta.is_some_and(|d| d != ScreenPoint::ZERO)
            || self.zoom_delta.is_some_and(|d| d != 0.0)
            || self.bearing_delta.is_some_and(|d| d != 0.0)
            || self.pitch_delta.is_some_and(|d| d != 0.0)
    }

    /// Shallow-overwrite `self`'s fields with the fields present in `from`.
    ///
    /// Within a single dispatch the last handler touching a field wins.
    pub(crate) fn overwrite_with(&mut self, from: HandlerResult) {
        if from.pan_delta.is_some() {
            self.pan_delta = from.pan_delta;
        }
        if from.zoom_delta.is_some() {
            self.zoom_delta = from.zoom_delta;
        }
        if from.bearing_delta.is_some() {
            self.bearing_delta = from.bearing_delta;
        }
        if from.pitch_delta.is_some() {
            self.pitch_delta = from.pitch_delta;
        }
        if from.around.is_some() {
            self.around = from.around;
        }
        if from.pinch_around.is_some() {
            self.pinch_around = from.pinch_around;
        }
        if from.camera_animation.is_some() {
            self.camera_animation = from.camera_animation;
        }
        if from.original_event.is_some() {
            self.original_event = from.original_event;
        }
        self.needs_render_frame |= from.needs_render_frame;
        self.no_inertia |= from.no_inertia;
    }

    /// Fold another merged result into this one across dispatch boundaries.
    ///
    /// Deltas sum (pan vectorially, scalars arithmetically); anchors are
    /// last-value-wins; inertia suppression is sticky. This deliberately
    /// differs from the within-dispatch overwrite semantics.
    pub(crate) fn accumulate(&mut self, other: HandlerResult) {
        if let Some(d) = other.pan_delta {
            self.pan_delta = Some(self.pan_delta.unwrap_or(ScreenPoint::ZERO) + d);
        }
        if let Some(d) = other.zoom_delta {
            self.zoom_delta = Some(self.zoom_delta.unwrap_or(0.0) + d);
        }
        if let Some(d) = other.bearing_delta {
            self.bearing_delta = Some(self.bearing_delta.unwrap_or(0.0) + d);
        }
        if let Some(d) = other.pitch_delta {
            self.pitch_delta = Some(self.pitch_delta.unwrap_or(0.0) + d);
        }
        if other.around.is_some() {
            self.around = other.around;
        }
        if other.pinch_around.is_some() {
            self.pinch_around = other.pinch_around;
        }
        self.no_inertia |= other.no_inertia;
    }
}
