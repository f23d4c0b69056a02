//! Camera transform abstraction and a concrete 2D implementation.
//!
//! The manager never owns camera state; it reads and mutates it through the
//! narrow [`CameraTransform`] trait. [`MapTransform`] is the reference
//! implementation: a rotated, uniformly scaled world plane with clamped zoom
//! and pitch. Pitch is stored but does not affect the planar projection.

use crate::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DEFAULT_ZOOM, MAX_PITCH, MAX_ZOOM, MIN_ZOOM,
    TILE_SIZE,
};
use crate::types::{ScreenPoint, WorldPoint};
use glam::DVec2;

/// Read/write access to the camera owned by the map view.
///
/// Zoom and pitch clamping are the transform's responsibility; callers apply
/// deltas with simple addition and rely on the setters to keep the state
/// valid.
pub trait CameraTransform {
    fn zoom(&self) -> f64;
    fn set_zoom(&mut self, zoom: f64);

    /// Bearing in degrees, normalized to (-180, 180].
    fn bearing(&self) -> f64;
    fn set_bearing(&mut self, bearing: f64);

    /// Pitch in degrees from vertical.
    fn pitch(&self) -> f64;
    fn set_pitch(&mut self, pitch: f64);

    /// World location currently at the center of the viewport.
    fn center(&self) -> WorldPoint;

    /// Screen point at the center of the viewport.
    fn viewport_center(&self) -> ScreenPoint;

    /// Project a viewport-relative screen point to its world location.
    fn screen_to_world(&self, point: ScreenPoint) -> WorldPoint;

    /// Solve the camera offset that places `world` under `screen`.
    fn set_world_under_screen(&mut self, world: WorldPoint, screen: ScreenPoint);
}

/// Concrete planar camera transform.
///
/// World coordinates are normalized to `[0, 1]` per axis; the world spans
/// `TILE_SIZE * 2^zoom` screen pixels. Bearing rotates the world plane around
/// the viewport center.
#[derive(Debug, Clone, PartialEq)]
pub struct MapTransform {
    center: WorldPoint,
    zoom: f64,
    bearing: f64,
    pitch: f64,
    viewport: ScreenPoint,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self::new(DVec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT))
    }
}

impl MapTransform {
    /// Create a transform centered on the middle of the world.
    pub fn new(viewport: ScreenPoint) -> Self {
        Self {
            center: DVec2::new(0.5, 0.5),
            zoom: DEFAULT_ZOOM,
            bearing: 0.0,
            pitch: 0.0,
            viewport,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Override the zoom clamp range.
    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> ScreenPoint {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ScreenPoint) {
        self.viewport = viewport;
    }

    /// Screen pixels spanned by the full world at the current zoom.
    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    fn rotate(v: DVec2, degrees: f64) -> DVec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    fn wrap_bearing(bearing: f64) -> f64 {
        let wrapped = (bearing + 180.0).rem_euclid(360.0) - 180.0;
        if wrapped == -180.0 { 180.0 } else { wrapped }
    }

    /// Project a world location to viewport-relative screen pixels.
    pub fn world_to_screen(&self, world: WorldPoint) -> ScreenPoint {
        let offset = (world - self.center) * self.world_size();
        self.viewport_center() + Self::rotate(offset, self.bearing)
    }
}

impl CameraTransform for MapTransform {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    fn bearing(&self) -> f64 {
        self.bearing
    }

    fn set_bearing(&mut self, bearing: f64) {
        self.bearing = Self::wrap_bearing(bearing);
    }

    fn pitch(&self) -> f64 {
        self.pitch
    }

    fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch.clamp(0.0, MAX_PITCH);
    }

    fn center(&self) -> WorldPoint {
        self.center
    }

    fn viewport_center(&self) -> ScreenPoint {
        self.viewport / 2.0
    }

    fn screen_to_world(&self, point: ScreenPoint) -> WorldPoint {
        let offset = Self::rotate(point - self.viewport_center(), -self.bearing);
        self.center + offset / self.world_size()
    }

    fn set_world_under_screen(&mut self, world: WorldPoint, screen: ScreenPoint) {
        let offset = Self::rotate(screen - self.viewport_center(), -self.bearing);
        self.center = world - offset / self.world_size();
    }
}
