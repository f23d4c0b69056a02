//! Routing one normalized event through the handler list.
//!
//! ## Performance Notes
//!
//! This is the hot path: pointer-move arrives at device rate (potentially
//! hundreds of events per second) while camera updates are coalesced to one
//! per rendering frame by the change queue. The dispatch loop itself stays
//! allocation-light and never touches the camera.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::event::InputEvent;
use crate::handler::{Handler, HandlerRegistry, HandlerResult};
use crate::host::MapHost;
use crate::manager::{merge, HandlerManager, PendingChange};
use crate::transform::CameraTransform;

impl HandlerManager {
    /// Dispatch one input event to every enabled, unblocked handler.
    ///
    /// Handlers run in registration order. Disabled handlers are skipped;
    /// handlers blocked by a conflicting active handler are reset instead of
    /// invoked. Results merge last-write-wins; if the dispatch produced a
    /// change or deactivated a handler, a pending change is queued and a
    /// frame is requested.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        transform: &mut dyn CameraTransform,
        host: &mut dyn MapHost,
    ) {
        trace!(kind = event.kind(), time = event.time(), "dispatching input event");

        let mut merged = HandlerResult::default();
        let mut gestures = BTreeMap::new();
        let mut active: BTreeSet<String> = BTreeSet::new();
        let mut needs_frame = false;

        for entry in self.registry.entries_mut() {
            if !entry.handler.is_enabled() {
                continue;
            }
            if HandlerRegistry::is_blocked(&active, &entry.allow_list, &entry.name) {
                trace!(handler = %entry.name, "blocked, resetting");
                entry.handler.reset();
                continue;
            }
            let result = invoke(entry.handler.as_mut(), event);
            let produced = result.is_some();
            if let Some(result) = result {
                needs_frame |= result.needs_render_frame;
                merge::merge_result(&mut merged, result, &entry.name, event, &mut gestures);
            }
            if produced || entry.handler.is_active() {
                active.insert(entry.name.clone());
            }
        }

        // Members of the previous active set absent from the current one get
        // this event attributed as their deactivation event. Synthetic render
        // ticks carry no raw event worth attributing.
        let deactivation_event = match event {
            InputEvent::RenderFrame { .. } => None,
            other => Some(other.clone()),
        };
        let mut deactivated: BTreeMap<String, Option<InputEvent>> = BTreeMap::new();
        for name in &self.active {
            if !active.contains(name) {
                deactivated.insert(name.clone(), deactivation_event.clone());
            }
        }
        self.active = active;

        if needs_frame {
            self.trigger_render_frame(host);
        }

        let camera_animation = merged.camera_animation.take();
        let has_change = merged.has_camera_change();

        if has_change || !gestures.is_empty() || !deactivated.is_empty() {
            self.changes.push(PendingChange {
                merged,
                gestures,
                deactivated,
            });
            self.trigger_render_frame(host);
        }

        // Manual gestures always preempt programmatic camera animations.
        if has_change || !self.active.is_empty() {
            host.cancel_animation();
        }

        // A direct camera animation wins over everything queued so far.
        if let Some(animation) = camera_animation {
            trace!("camera animation bypass");
            self.inertia.clear();
            self.changes.clear();
            animation(transform, host);
        }
    }
}

/// Select the handler callback matching the event's kind.
fn invoke(handler: &mut dyn Handler, event: &InputEvent) -> Option<HandlerResult> {
    match event {
        InputEvent::PointerDown(e) => handler.pointer_down(e),
        InputEvent::PointerMove(e) => handler.pointer_move(e),
        InputEvent::PointerUp(e) => handler.pointer_up(e),
        InputEvent::DoubleClick(e) => handler.double_click(e),
        InputEvent::TouchStart(e) => handler.touch_start(e),
        InputEvent::TouchMove(e) => handler.touch_move(e),
        InputEvent::TouchEnd(e) => handler.touch_end(e),
        InputEvent::TouchCancel(e) => handler.touch_cancel(e),
        InputEvent::Wheel(e) => handler.wheel(e),
        InputEvent::KeyDown(e) => handler.key_down(e),
        InputEvent::KeyUp(e) => handler.key_up(e),
        InputEvent::RenderFrame { time } => handler.render_frame(*time),
    }
}
