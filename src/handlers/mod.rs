//! Shipped gesture recognizers.
//!
//! Deliberately simple reference implementations that exercise every path
//! through the manager: button-drag panning, frame-smoothed wheel zoom, and
//! keyboard steps via the camera-animation bypass. Embedders with richer
//! recognition needs register their own [`crate::handler::Handler`]s instead.

mod keyboard;
mod mouse_pan;
mod scroll_zoom;

pub use keyboard::KeyboardHandler;
pub use mouse_pan::MousePanHandler;
pub use scroll_zoom::ScrollZoomHandler;
