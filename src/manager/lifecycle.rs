//! Lifecycle notification derivation.
//!
//! Runs once per flush, after the camera update. Derives the per-category
//! `start -> change* -> end` bracket and the overall `movestart`/`move`/
//! `moveend` bracket from the persistent events-in-progress map, and decides
//! between an inertial ease, a bearing snap, and a plain `moveend` when the
//! last gesture ends.

use std::collections::BTreeMap;

use tracing::debug;

use crate::event::InputEvent;
use crate::host::MapHost;
use crate::manager::{ActiveGesture, HandlerManager};
use crate::transform::CameraTransform;
use crate::types::{GestureCategory, Timestamp};

/// Nonzero bearings this close to north snap to exactly 0 at gesture end.
fn should_snap_to_north(bearing: f64, tolerance: f64) -> bool {
    bearing != 0.0 && bearing.abs() < tolerance
}

impl HandlerManager {
    /// Emit lifecycle notifications for one flush.
    ///
    /// `gestures` are the categories contributing this flush; `deactivated`
    /// maps handler names to the event that deactivated them, used for end
    /// attribution. Runs while the re-entrancy guard is held: camera
    /// mutations performed here must not reset the handlers that caused them.
    pub(crate) fn fire_events(
        &mut self,
        gestures: BTreeMap<GestureCategory, ActiveGesture>,
        deactivated: BTreeMap<String, Option<InputEvent>>,
        now: Timestamp,
        transform: &mut dyn CameraTransform,
        host: &mut dyn MapHost,
    ) {
        let was_moving = !self.events_in_progress.is_empty();

        let mut started: Vec<(GestureCategory, InputEvent)> = Vec::new();
        for (category, gesture) in &gestures {
            if !self.events_in_progress.contains_key(category) {
                started.push((*category, gesture.event.clone()));
            }
        }
        for (category, gesture) in gestures.iter() {
            self.events_in_progress.insert(*category, gesture.clone());
        }

        if !was_moving && !gestures.is_empty() {
            let originating = started
                .first()
                .map(|(_, event)| event)
                .or_else(|| gestures.values().next().map(|g| &g.event));
            host.fire_event("movestart", originating);
        }
        for (category, event) in &started {
            host.fire_event(category.start_event_name(), Some(event));
        }
        if !gestures.is_empty() {
            host.fire_event("move", gestures.values().next().map(|g| &g.event));
        }
        for (category, gesture) in &gestures {
            host.fire_event(category.change_event_name(), Some(&gesture.event));
        }

        // Categories whose owning handler deactivated end now, attributed to
        // the deactivation event when one was captured.
        let mut ended: Vec<(GestureCategory, InputEvent)> = Vec::new();
        let categories: Vec<GestureCategory> = self.events_in_progress.keys().copied().collect();
        for category in categories {
            let owner_active = self
                .events_in_progress
                .get(&category)
                .is_some_and(|g| self.active.contains(&g.handler_name));
            if owner_active {
                continue;
            }
            if let Some(gesture) = self.events_in_progress.remove(&category) {
                let event = deactivated
                    .get(&gesture.handler_name)
                    .and_then(|e| e.clone())
                    .unwrap_or(gesture.event);
                ended.push((category, event));
            }
        }
        for (category, event) in &ended {
            host.fire_event(category.end_event_name(), Some(event));
        }

        let still_moving = !self.events_in_progress.is_empty();
        if (was_moving || !ended.is_empty()) && !still_moving {
            self.finish_gesture(ended.last().map(|(_, e)| e.clone()), now, transform, host);
        }
    }

    /// The last active category just ended: hand off to inertia or settle.
    fn finish_gesture(
        &mut self,
        originating: Option<InputEvent>,
        now: Timestamp,
        transform: &mut dyn CameraTransform,
        host: &mut dyn MapHost,
    ) {
        let snap = self.options.bearing_snap;
        match self.inertia.ease_target(now, transform, &self.options.inertia) {
            Some(mut target) => {
                let final_bearing = target.bearing.unwrap_or_else(|| transform.bearing());
                if should_snap_to_north(final_bearing, snap) {
                    target.bearing = Some(0.0);
                }
                debug!(duration_ms = target.duration_ms, "gesture ended with inertia");
                host.ease_to(target, originating.as_ref());
            }
            None => {
                debug!("gesture ended without inertia");
                host.fire_event("moveend", originating.as_ref());
                if should_snap_to_north(transform.bearing(), snap) {
                    host.reset_north();
                }
            }
        }
    }
}
