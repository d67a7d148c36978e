//! Error types for the geometry crate.
//!
//! These are invariant violations, not runtime conditions: a caller that
//! hits one of them handed the geometry model something it promised not to.
//! They are surfaced as errors rather than asserts so that batch exports
//! can fail one path and keep going.

use thiserror::Error;

/// Errors raised by invalid geometry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polyline must contain at least one segment.
    #[error("Polyline must contain at least one segment")]
    EmptyPolyline,

    /// Arc conversion was requested on a straight segment.
    #[error("Straight segment has no arc representation")]
    LineHasNoArc,

    /// A segment whose endpoints coincide has no defined geometry.
    #[error("Degenerate zero-length segment at ({x}, {y})")]
    DegenerateBulge { x: f64, y: f64 },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
