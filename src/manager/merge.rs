//! Per-event result merging and gesture-ownership recording.

use std::collections::BTreeMap;

use crate::event::InputEvent;
use crate::handler::HandlerResult;
use crate::manager::ActiveGesture;
use crate::types::GestureCategory;

/// Merge one handler's result into the dispatch-wide merged result and record
/// which gesture categories the handler now owns.
///
/// Field merging is shallow last-write-wins: within a single dispatch the
/// last contributing handler's value for a field stands. For every delta
/// field present in `from` (zero included), `handler_name` becomes the
/// category's owner, with the originating event attached for later end-event
/// attribution.
pub(crate) fn merge_result(
    merged: &mut HandlerResult,
    from: HandlerResult,
    handler_name: &str,
    dispatch_event: &InputEvent,
    gestures: &mut BTreeMap<GestureCategory, ActiveGesture>,
) {
    let originating = from
        .original_event
        .clone()
        .unwrap_or_else(|| dispatch_event.clone());
    for category in from.categories() {
        gestures.insert(
            category,
            ActiveGesture {
                handler_name: handler_name.to_string(),
                event: originating.clone(),
            },
        );
    }
    merged.overwrite_with(from);
}
