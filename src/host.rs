//! The host surface the manager drives.
//!
//! The map view embedding a [`crate::manager::HandlerManager`] implements
//! [`MapHost`]. The manager calls out through this trait for everything it
//! does not own: frame scheduling, notifications, programmatic camera
//! animation.

use crate::event::InputEvent;
use crate::types::ScreenPoint;

/// A decelerating camera animation derived from gesture velocity.
///
/// All present fields animate together over `duration_ms` with an ease-out
/// curve. `offset` is a screen-space pan to travel through; the scalar fields
/// are absolute end values.
#[derive(Debug, Clone, PartialEq)]
pub struct EaseTarget {
    pub offset: Option<ScreenPoint>,
    pub zoom: Option<f64>,
    pub bearing: Option<f64>,
    pub pitch: Option<f64>,
    pub duration_ms: f64,
}

impl EaseTarget {
    pub(crate) fn empty() -> Self {
        Self {
            offset: None,
            zoom: None,
            bearing: None,
            pitch: None,
            duration_ms: 0.0,
        }
    }

    /// True if no property would animate.
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.zoom.is_none() && self.bearing.is_none() && self.pitch.is_none()
    }
}

/// Capabilities the embedding map view provides to the manager.
pub trait MapHost {
    /// Stop any in-flight programmatic camera animation. Called whenever a
    /// manual gesture produces camera changes; manual input always preempts
    /// animated transitions.
    fn cancel_animation(&mut self);

    /// Schedule one rendering-frame callback. The embedder must call
    /// [`crate::manager::HandlerManager::render_frame`] when it fires. The
    /// manager deduplicates requests; at most one is outstanding at a time.
    fn request_frame(&mut self);

    /// Ask the view to redraw with the mutated camera transform.
    fn request_render(&mut self);

    /// Deliver a lifecycle notification (`movestart`, `drag`, `zoomend`, ...)
    /// with the originating raw event when one is available.
    fn fire_event(&mut self, name: &'static str, originating: Option<&InputEvent>);

    /// Run a decelerating camera animation. The animation owns the eventual
    /// `moveend` notification.
    fn ease_to(&mut self, target: EaseTarget, originating: Option<&InputEvent>);

    /// Animate the bearing back to exactly north.
    fn reset_north(&mut self);
}
