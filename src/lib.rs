//! Gesture arbitration and camera plumbing for an interactive map view.
//!
//! mapboard turns a stream of normalized pointer/touch/wheel/keyboard events
//! into camera-transform changes (pan, zoom, rotate, pitch). Many gesture
//! handlers observe the same event stream concurrently; the
//! [`manager::HandlerManager`] arbitrates between them with per-handler
//! allow-lists, merges their results deterministically, coalesces everything
//! into at most one camera update per rendering frame, and degrades into
//! time-based inertial motion once input stops.
//!
//! ## Architecture
//!
//! - [`event`] - the normalized input event model (timestamps required)
//! - [`handler`] - the recognizer capability trait, result type and registry
//! - [`manager`] - dispatch, merging, frame coalescing, lifecycle, inertia
//! - [`transform`] - the camera abstraction and a concrete 2D transform
//! - [`host`] - the surface the embedding map view provides
//! - [`handlers`] - simple shipped recognizers (pan, wheel zoom, keyboard)
//!
//! The manager owns its handlers and nothing else: camera state and frame
//! scheduling stay with the embedder, reached through `&mut dyn` arguments
//! on each call. Everything runs synchronously on the thread driving
//! rendering; there is no interior mutability and no locking.

pub mod constants;
pub mod error;
pub mod event;
pub mod handler;
pub mod handlers;
pub mod host;
pub mod manager;
pub mod transform;
pub mod types;

pub use error::{InputError, InputResult};
pub use event::{InputEvent, KeyEvent, PointerEvent, TouchEvent, WheelEvent};
pub use handler::{Handler, HandlerResult};
pub use host::{EaseTarget, MapHost};
pub use manager::{HandlerManager, InertiaOptions, InertiaSettings, ManagerOptions};
pub use transform::{CameraTransform, MapTransform};
pub use types::{GestureCategory, Key, Modifiers, MouseButton, ScreenPoint, Timestamp, WorldPoint};
