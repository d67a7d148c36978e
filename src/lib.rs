//! # camcut
//!
//! camcut lowers 2D machining tasks into G-code. A task is an ordered set
//! of cutting paths — continuous curves of straight and circular-arc
//! segments — each carrying its own depth and feed settings.
//!
//! ## Architecture
//!
//! The workspace is organized as three crates plus this facade:
//!
//! 1. **camcut-geometry** - point/bulge/polyline model, parallel-offset
//!    binding (cavalier_contours)
//! 2. **camcut-core** - measurement units, tool library
//! 3. **camcut-exporter** - task model, mill and laser G-code pipelines
//! 4. **camcut** - re-exports and logging setup
//!
//! ## Pipelines
//!
//! - **Mill**: multi-pass subtractive cutting with progressive plunge
//!   depth, retraction between paths, and direction alternation on open
//!   paths so the tool never rapid-traverses back to the start.
//! - **Laser**: single-pass cutting with beam on/off bracketing per path.

pub use camcut_geometry::{
    Bulge, Circle, GeometryError, GeometryResult, Orientation, Point, Polyline,
};

pub use camcut_core::{
    init_standard_library, MeasurementSystem, Tool, ToolCuttingParams, ToolId, ToolLibrary,
    ToolType,
};

pub use camcut_exporter::{
    CutCompensation, ExportError, ExportResult, LaserExporter, LaserPostProcessor, MillExporter,
    MillPostProcessor, PassIterator, Path, PathSettings, Task,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
