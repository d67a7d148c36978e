//! Error types for toolpath export.

use camcut_geometry::GeometryError;
use std::io;
use thiserror::Error;

/// Errors that can occur while lowering a task to machine commands.
///
/// Configuration errors are raised before any command is emitted; I/O
/// errors abort the whole export (a partial program is never valid);
/// geometry errors signal invariant violations in the input paths.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Tool or path settings reject the export.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The output sink could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A geometry invariant was violated while tracing a path.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::Configuration("depth per pass must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: depth per pass must be positive"
        );

        let err: ExportError = GeometryError::EmptyPolyline.into();
        assert_eq!(
            err.to_string(),
            "Geometry error: Polyline must contain at least one segment"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
