//! Spatial-subsystem error type.

use thiserror::Error;

use lg_core::Rect;

/// Errors produced while building a `Geometry`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("{what} has a non-positive or non-finite size: {rect:?}")]
    InvalidRect { what: &'static str, rect: Rect },

    #[error("{what} {rect:?} does not fit inside the field {field:?}")]
    OutOfField { what: &'static str, rect: Rect, field: Rect },

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("track thickness must be finite and positive, got {0}")]
    InvalidThickness(f32),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
