//! Frame-request deduplication and the change queue.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::event::InputEvent;
use crate::handler::HandlerResult;
use crate::host::MapHost;
use crate::manager::{ActiveGesture, HandlerManager};
use crate::transform::CameraTransform;
use crate::types::{GestureCategory, Timestamp};

impl HandlerManager {
    /// Request one rendering-frame callback from the host, unless one is
    /// already outstanding. An arbitrarily high input rate therefore produces
    /// at most one flush per actual rendering frame.
    pub(crate) fn trigger_render_frame(&mut self, host: &mut dyn MapHost) {
        if !self.frame_pending {
            self.frame_pending = true;
            host.request_frame();
        }
    }

    /// Rendering-frame callback entry point.
    ///
    /// Dispatches the synthetic render-frame tick through the regular handler
    /// pipeline (time-based handlers emit their per-frame deltas here), then
    /// flushes everything queued since the last frame into a single camera
    /// update.
    pub fn render_frame(
        &mut self,
        now: Timestamp,
        transform: &mut dyn CameraTransform,
        host: &mut dyn MapHost,
    ) {
        self.frame_pending = false;
        self.handle_event(&InputEvent::RenderFrame { time: now }, transform, host);
        self.flush(now, transform, host);
    }

    /// Combine and apply all queued changes.
    ///
    /// Pan deltas sum vectorially, scalar deltas arithmetically; anchors are
    /// last-value-wins with the pinch anchor overriding; inertia suppression
    /// is sticky. A stale callback after [`HandlerManager::stop`] sees an
    /// empty queue and returns without touching the camera.
    pub(crate) fn flush(
        &mut self,
        now: Timestamp,
        transform: &mut dyn CameraTransform,
        host: &mut dyn MapHost,
    ) {
        if self.changes.is_empty() {
            return;
        }

        let mut combined = HandlerResult::default();
        let mut gestures: BTreeMap<GestureCategory, ActiveGesture> = BTreeMap::new();
        let mut deactivated: BTreeMap<String, Option<InputEvent>> = BTreeMap::new();
        for change in self.changes.drain(..) {
            combined.accumulate(change.merged);
            gestures.extend(change.gestures);
            deactivated.extend(change.deactivated);
        }

        trace!(
            queued_gestures = gestures.len(),
            deactivated = deactivated.len(),
            has_change = combined.has_camera_change(),
            "flushing change queue"
        );

        // A gesture starting from full idle invalidates any leftover samples.
        if self.events_in_progress.is_empty() && !gestures.is_empty() {
            debug!("gesture started, clearing inertia history");
            self.inertia.clear();
        }

        self.updating_camera = true;
        if combined.has_camera_change() {
            self.apply_changes(&combined, now, transform, host);
        }
        self.fire_events(gestures, deactivated, now, transform, host);
        self.updating_camera = false;
    }
}
