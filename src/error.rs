//! Error types for tracking lookups and coordinate validation.

use thiserror::Error;

/// Errors surfaced by tracking-id resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackingError {
    /// The normalized id has no registry entry.
    #[error("tracking id not found: {id}")]
    NotFound { id: String },

    /// The route source returned a template that cannot form a route.
    #[error("invalid route for {id}: {reason}")]
    InvalidRoute { id: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
}
