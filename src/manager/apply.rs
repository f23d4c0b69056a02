//! The anchor-preserving camera update.

use tracing::trace;

use crate::handler::HandlerResult;
use crate::host::MapHost;
use crate::manager::HandlerManager;
use crate::transform::CameraTransform;
use crate::types::Timestamp;

impl HandlerManager {
    /// Apply one combined per-frame delta to the camera transform.
    ///
    /// The anchor invariant: the world location under the anchor point before
    /// the update must still be under it afterwards. Bearing, pitch and zoom
    /// alone would shift that location, so the update resolves the anchored
    /// world location first, mutates the scalar state, then re-solves the
    /// camera offset to put the location back. When a pan delta is present
    /// the location under `anchor - pan_delta` is resolved instead, which
    /// applies the pan as a viewport translation in the same solve.
    pub(crate) fn apply_changes(
        &mut self,
        combined: &HandlerResult,
        now: Timestamp,
        transform: &mut dyn CameraTransform,
        host: &mut dyn MapHost,
    ) {
        let anchor = combined
            .pinch_around
            .or(combined.around)
            .unwrap_or_else(|| transform.viewport_center());

        let resolve_at = match combined.pan_delta {
            Some(pan) => anchor - pan,
            None => anchor,
        };
        let location = transform.screen_to_world(resolve_at);

        if let Some(delta) = combined.bearing_delta {
            transform.set_bearing(transform.bearing() + delta);
        }
        if let Some(delta) = combined.pitch_delta {
            transform.set_pitch(transform.pitch() + delta);
        }
        if let Some(delta) = combined.zoom_delta {
            // The transform clamps to its valid range
            transform.set_zoom(transform.zoom() + delta);
        }
        transform.set_world_under_screen(location, anchor);

        trace!(
            zoom = transform.zoom(),
            bearing = transform.bearing(),
            pitch = transform.pitch(),
            "camera updated"
        );

        host.request_render();

        if !combined.no_inertia {
            self.inertia.record(now, combined);
        }
    }
}
