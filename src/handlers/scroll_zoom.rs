//! Frame-smoothed scroll-wheel zoom.
//!
//! Wheel events only set a target; the actual zoom deltas come from the
//! synthetic render-frame tick, a fixed fraction of the remaining distance
//! per frame. This is the continuous-gesture path: after the last wheel
//! event the handler keeps producing deltas until the remainder settles.

use crate::constants::{WHEEL_SETTLE_THRESHOLD, WHEEL_SMOOTHING_RATE, WHEEL_ZOOM_RATE};
use crate::event::{InputEvent, WheelEvent};
use crate::handler::{Handler, HandlerResult};
use crate::types::{ScreenPoint, Timestamp};

pub struct ScrollZoomHandler {
    enabled: bool,
    /// Zoom distance not yet applied.
    remaining: f64,
    /// Cursor position of the latest wheel event, used as the zoom anchor.
    around: Option<ScreenPoint>,
    /// Latest wheel event, attributed to the smoothed per-frame deltas.
    last_wheel: Option<InputEvent>,
    engaged: bool,
}

impl ScrollZoomHandler {
    /// Registration name.
    pub const NAME: &'static str = "scroll_zoom";

    pub fn new() -> Self {
        Self {
            enabled: true,
            remaining: 0.0,
            around: None,
            last_wheel: None,
            engaged: false,
        }
    }
}

impl Default for ScrollZoomHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ScrollZoomHandler {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_active(&self) -> bool {
        self.engaged
    }

    fn reset(&mut self) {
        self.remaining = 0.0;
        self.around = None;
        self.last_wheel = None;
        self.engaged = false;
    }

    fn wheel(&mut self, event: &WheelEvent) -> Option<HandlerResult> {
        self.remaining += -event.delta / WHEEL_ZOOM_RATE;
        self.around = Some(event.position);
        self.last_wheel = Some(InputEvent::Wheel(event.clone()));
        self.engaged = true;
        Some(HandlerResult {
            needs_render_frame: true,
            ..Default::default()
        })
    }

    fn render_frame(&mut self, _time: Timestamp) -> Option<HandlerResult> {
        if !self.engaged {
            return None;
        }
        let step = if self.remaining.abs() < WHEEL_SETTLE_THRESHOLD {
            self.engaged = false;
            std::mem::take(&mut self.remaining)
        } else {
            let step = self.remaining * WHEEL_SMOOTHING_RATE;
            self.remaining -= step;
            step
        };
        Some(HandlerResult {
            zoom_delta: Some(step),
            around: self.around,
            original_event: self.last_wheel.clone(),
            needs_render_frame: self.engaged,
            // The smoothing already decays over time; a second fling on top
            // would overshoot
            no_inertia: true,
            ..Default::default()
        })
    }
}
