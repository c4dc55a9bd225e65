//! Unified error type for director operations
//!
//! Every director failure is advisory: an `Err` never carries a
//! partially-applied state change, and the active view is left untouched.
//! Callers that only care about success/failure of a request can ignore the
//! value and rely on the query-style APIs instead.

use thiserror::Error;

/// Unified error type for camera director operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectorError {
    /// A shot id or actor reference could not be resolved (never registered,
    /// or the referenced actor has since been destroyed)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A blend is already in flight; the request was rejected, not queued
    #[error("Camera is blending")]
    Busy,

    /// A collection the operation needs has no usable entries
    #[error("Nothing registered: {0}")]
    Empty(&'static str),

    /// Caller passed an argument that can never resolve (e.g. an empty id)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DirectorError {
    /// Creates a not-found error for an unresolvable shot id or actor.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Creates an invalid-argument error for a malformed request.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
