//! The interaction handler manager.
//!
//! Turns the normalized event stream into frame-synchronous camera updates:
//! dispatches each event to every enabled, unblocked handler, merges their
//! results, coalesces merged results into at most one camera update per
//! rendering frame, and derives lifecycle notifications and post-gesture
//! inertia.
//!
//! The `impl HandlerManager` is split across this module tree:
//!
//! - `dispatch` - routing one event through the handler list
//! - `merge` - per-event result merging and gesture-ownership recording
//! - `frame` - frame-request deduplication and the change queue
//! - `apply` - the anchor-preserving camera update
//! - `lifecycle` - start/change/end and move/moveend derivation
//! - `inertia` - recent-delta history and deceleration targets

mod apply;
mod dispatch;
mod frame;
mod inertia;
mod lifecycle;
mod merge;

pub use inertia::{InertiaOptions, InertiaSettings};

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BEARING_SNAP;
use crate::error::InputResult;
use crate::event::InputEvent;
use crate::handler::{Handler, HandlerRegistry, HandlerResult};
use crate::types::GestureCategory;
use inertia::InertiaTracker;

/// Tunables for a [`HandlerManager`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerOptions {
    /// Final bearings with `0 < |b| < bearing_snap` degrees snap to north.
    pub bearing_snap: f64,
    pub inertia: InertiaOptions,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            bearing_snap: DEFAULT_BEARING_SNAP,
            inertia: InertiaOptions::default(),
        }
    }
}

/// A gesture category's current owner and the event that last drove it.
#[derive(Debug, Clone)]
pub(crate) struct ActiveGesture {
    pub handler_name: String,
    pub event: InputEvent,
}

/// One merged dispatch result queued for the next frame flush.
///
/// `deactivated` maps each newly-inactive handler to the input event that
/// deactivated it; `None` when the deactivation surfaced on a synthetic
/// render tick, in which case end attribution falls back to the gesture's
/// last originating event.
pub(crate) struct PendingChange {
    pub merged: HandlerResult,
    pub gestures: BTreeMap<GestureCategory, ActiveGesture>,
    pub deactivated: BTreeMap<String, Option<InputEvent>>,
}

/// Arbitrates concurrently-enabled gesture handlers and owns all interaction
/// state that crosses dispatch boundaries: the previous active-handler set,
/// the per-category events-in-progress map, and the pending change queue.
///
/// The manager is exclusively owned by the map view and exclusively owns its
/// handlers; it reaches the camera and the view only through the
/// [`crate::transform::CameraTransform`] and [`crate::host::MapHost`]
/// arguments of each call.
pub struct HandlerManager {
    pub(crate) registry: HandlerRegistry,
    pub(crate) options: ManagerOptions,
    /// Handlers active as of the most recent dispatch.
    pub(crate) active: BTreeSet<String>,
    /// Gesture categories currently in progress, persisted across dispatches
    /// until the owning handler deactivates.
    pub(crate) events_in_progress: BTreeMap<GestureCategory, ActiveGesture>,
    /// Merged results buffered since the last frame flush.
    pub(crate) changes: Vec<PendingChange>,
    pub(crate) inertia: InertiaTracker,
    /// Frame-request token; at most one host frame request is outstanding.
    pub(crate) frame_pending: bool,
    /// Re-entrancy guard held while a flush mutates the camera.
    pub(crate) updating_camera: bool,
}

impl HandlerManager {
    pub fn new(options: ManagerOptions) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            options,
            active: BTreeSet::new(),
            events_in_progress: BTreeMap::new(),
            changes: Vec::new(),
            inertia: InertiaTracker::new(),
            frame_pending: false,
            updating_camera: false,
        }
    }

    /// A manager with the shipped handlers registered. Mouse pan and scroll
    /// zoom allow each other (drag-while-zooming is fine); the keyboard
    /// handler is discrete and never active, so it needs no allowances.
    pub fn with_default_handlers(options: ManagerOptions) -> Self {
        use crate::handlers::{KeyboardHandler, MousePanHandler, ScrollZoomHandler};

        let mut manager = Self::new(options);
        let added = manager
            .add_handler(
                MousePanHandler::NAME,
                Box::new(MousePanHandler::new()),
                vec![ScrollZoomHandler::NAME.to_string()],
            )
            .and_then(|_| {
                manager.add_handler(
                    ScrollZoomHandler::NAME,
                    Box::new(ScrollZoomHandler::new()),
                    vec![MousePanHandler::NAME.to_string()],
                )
            })
            .and_then(|_| {
                manager.add_handler(KeyboardHandler::NAME, Box::new(KeyboardHandler::new()), vec![])
            });
        debug_assert!(added.is_ok(), "shipped handler names are unique");
        manager
    }

    /// Register a handler. Dispatch order is registration order; `allow_list`
    /// names the handlers this one may remain active alongside.
    pub fn add_handler(
        &mut self,
        name: impl Into<String>,
        handler: Box<dyn Handler>,
        allow_list: Vec<String>,
    ) -> InputResult<()> {
        self.registry.add(name, handler, allow_list)
    }

    pub fn enable_handler(&mut self, name: &str) -> InputResult<()> {
        self.registry.get_mut(name)?.enable();
        Ok(())
    }

    pub fn disable_handler(&mut self, name: &str) -> InputResult<()> {
        let handler = self.registry.get_mut(name)?;
        handler.reset();
        handler.disable();
        Ok(())
    }

    pub fn is_handler_enabled(&self, name: &str) -> InputResult<bool> {
        Ok(self.registry.get(name)?.is_enabled())
    }

    /// True while any gesture category is in progress.
    pub fn is_moving(&self) -> bool {
        !self.events_in_progress.is_empty()
    }

    /// Gesture categories currently in progress.
    pub fn active_gestures(&self) -> Vec<GestureCategory> {
        self.events_in_progress.keys().copied().collect()
    }

    /// Reset every handler and discard all buffered interaction state.
    ///
    /// A frame callback that fires after this observes an empty queue and
    /// performs no camera mutation. No-op while a flush is mutating the
    /// camera, so camera changes applied by the manager itself can never
    /// reset the very handlers that produced them.
    pub fn stop(&mut self) {
        if self.updating_camera {
            return;
        }
        tracing::debug!("stopping all gesture handlers");
        for entry in self.registry.entries_mut() {
            entry.handler.reset();
        }
        self.active.clear();
        self.events_in_progress.clear();
        self.changes.clear();
        self.inertia.clear();
    }
}
