//! Recent-delta history and post-gesture deceleration targets.
//!
//! Keeps a bounded ring of timestamped combined deltas while a gesture is in
//! progress. At gesture end the samples inside the recency window yield a
//! linear velocity estimate per property; fast enough estimates become an
//! ease-out camera animation, slow ones an immediate stop.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    INERTIA_BEARING_DECELERATION, INERTIA_BEARING_MAX_SPEED, INERTIA_HORIZON_MS,
    INERTIA_LINEARITY, INERTIA_MAX_SAMPLES, INERTIA_MIN_SPEED_RATIO, INERTIA_PAN_DECELERATION,
    INERTIA_PAN_MAX_SPEED, INERTIA_PITCH_DECELERATION, INERTIA_PITCH_MAX_SPEED,
    INERTIA_ZOOM_DECELERATION, INERTIA_ZOOM_MAX_SPEED,
};
use crate::handler::HandlerResult;
use crate::host::EaseTarget;
use crate::transform::CameraTransform;
use crate::types::{ScreenPoint, Timestamp};

/// Fling limits for one camera property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertiaSettings {
    /// Velocity cap in property units per second.
    pub max_speed: f64,
    /// Deceleration in property units per second squared.
    pub deceleration: f64,
}

/// Per-property fling tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InertiaOptions {
    /// Scales the raw velocity estimate before deceleration is applied.
    pub linearity: f64,
    pub pan: InertiaSettings,
    pub zoom: InertiaSettings,
    pub bearing: InertiaSettings,
    pub pitch: InertiaSettings,
}

impl Default for InertiaOptions {
    fn default() -> Self {
        Self {
            linearity: INERTIA_LINEARITY,
            pan: InertiaSettings {
                max_speed: INERTIA_PAN_MAX_SPEED,
                deceleration: INERTIA_PAN_DECELERATION,
            },
            zoom: InertiaSettings {
                max_speed: INERTIA_ZOOM_MAX_SPEED,
                deceleration: INERTIA_ZOOM_DECELERATION,
            },
            bearing: InertiaSettings {
                max_speed: INERTIA_BEARING_MAX_SPEED,
                deceleration: INERTIA_BEARING_DECELERATION,
            },
            pitch: InertiaSettings {
                max_speed: INERTIA_PITCH_MAX_SPEED,
                deceleration: INERTIA_PITCH_DECELERATION,
            },
        }
    }
}

/// One recorded combined delta.
#[derive(Debug, Clone, Copy)]
struct InertiaSample {
    time: Timestamp,
    pan: ScreenPoint,
    zoom: f64,
    bearing: f64,
    pitch: f64,
}

/// Bounded ring of recent combined deltas.
#[derive(Debug, Default)]
pub(crate) struct InertiaTracker {
    samples: VecDeque<InertiaSample>,
}

impl InertiaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one applied combined delta. Samples outside the recency window
    /// are dropped eagerly so the ring stays small during long gestures.
    pub fn record(&mut self, now: Timestamp, combined: &HandlerResult) {
        self.drain(now);
        self.samples.push_back(InertiaSample {
            time: now,
            pan: combined.pan_delta.unwrap_or(ScreenPoint::ZERO),
            zoom: combined.zoom_delta.unwrap_or(0.0),
            bearing: combined.bearing_delta.unwrap_or(0.0),
            pitch: combined.pitch_delta.unwrap_or(0.0),
        });
        while self.samples.len() > INERTIA_MAX_SAMPLES {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    fn drain(&mut self, now: Timestamp) {
        while let Some(front) = self.samples.front() {
            if now - front.time > INERTIA_HORIZON_MS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Derive a deceleration target from the recorded history, or `None` for
    /// an immediate stop.
    ///
    /// Each property gets an independent linear velocity fit over the samples
    /// still inside the recency window; properties whose clamped speed stays
    /// under the minimum threshold contribute nothing. The overall duration
    /// is the longest per-property deceleration time.
    pub fn ease_target(
        &mut self,
        now: Timestamp,
        transform: &dyn CameraTransform,
        options: &InertiaOptions,
    ) -> Option<EaseTarget> {
        self.drain(now);
        if self.samples.len() < 2 {
            return None;
        }
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return None;
        };
        let duration_s = (last.time - first.time) / 1000.0;
        if duration_s <= 0.0 {
            return None;
        }

        let mut pan_total = ScreenPoint::ZERO;
        let mut zoom_total = 0.0;
        let mut bearing_total = 0.0;
        let mut pitch_total = 0.0;
        for sample in &self.samples {
            pan_total += sample.pan;
            zoom_total += sample.zoom;
            bearing_total += sample.bearing;
            pitch_total += sample.pitch;
        }

        let mut target = EaseTarget::empty();
        let linearity = options.linearity;

        // Pan velocity is a vector; clamp its magnitude, not its components.
        let pan_velocity = pan_total * linearity / duration_s;
        let pan_speed = pan_velocity.length().min(options.pan.max_speed);
        if pan_speed > options.pan.max_speed * INERTIA_MIN_SPEED_RATIO {
            let direction = pan_velocity.normalize();
            let ease_s = pan_speed / (options.pan.deceleration * linearity);
            target.offset = Some(direction * (pan_speed * ease_s / 2.0));
            target.duration_ms = target.duration_ms.max(ease_s * 1000.0);
        }

        if let Some((amount, ease_s)) = decelerate(zoom_total, duration_s, linearity, options.zoom)
        {
            target.zoom = Some(transform.zoom() + amount);
            target.duration_ms = target.duration_ms.max(ease_s * 1000.0);
        }
        if let Some((amount, ease_s)) =
            decelerate(bearing_total, duration_s, linearity, options.bearing)
        {
            target.bearing = Some(transform.bearing() + amount);
            target.duration_ms = target.duration_ms.max(ease_s * 1000.0);
        }
        if let Some((amount, ease_s)) =
            decelerate(pitch_total, duration_s, linearity, options.pitch)
        {
            target.pitch = Some(transform.pitch() + amount);
            target.duration_ms = target.duration_ms.max(ease_s * 1000.0);
        }

        self.samples.clear();

        if target.is_empty() {
            None
        } else {
            debug!(duration_ms = target.duration_ms, "derived inertial ease target");
            Some(target)
        }
    }
}

/// Linear velocity fit for one scalar property: clamp the estimated speed,
/// reject sub-threshold flings, and return the decayed travel distance plus
/// the deceleration time in seconds.
fn decelerate(
    total: f64,
    duration_s: f64,
    linearity: f64,
    settings: InertiaSettings,
) -> Option<(f64, f64)> {
    let velocity = (total * linearity / duration_s)
        .clamp(-settings.max_speed, settings.max_speed);
    if velocity.abs() <= settings.max_speed * INERTIA_MIN_SPEED_RATIO {
        return None;
    }
    let ease_s = velocity.abs() / (settings.deceleration * linearity);
    Some((velocity * ease_s / 2.0, ease_s))
}
