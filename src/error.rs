//! Error types for handler registration and lookup.
//!
//! Provides unified error handling for manager configuration. Event dispatch
//! itself is infallible by design: events nobody listens to are ignored, and
//! a panicking handler callback is a broken recognizer that must not be
//! masked here.

use thiserror::Error;

/// Errors that can occur while configuring the handler manager
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A handler with this name is already registered
    #[error("handler already registered: {0}")]
    DuplicateHandler(String),

    /// No handler with this name is registered
    #[error("unknown handler: {0}")]
    UnknownHandler(String),
}

/// Result type alias for manager configuration operations
pub type InputResult<T> = Result<T, InputError>;
