//! # camcut Exporter
//!
//! Lowers a [`model::Task`] — an ordered collection of cutting paths with
//! per-path settings — into a stream of machine motion commands.
//!
//! Two pipelines are provided:
//!
//! - **Mill** ([`MillExporter`]): multi-pass subtractive cutting. Each path
//!   is cut in successive depth passes with the plunge clamped to the
//!   configured total depth; open paths alternate traversal direction
//!   between passes so the tool never travels back to the start empty.
//! - **Laser** ([`LaserExporter`]): single-pass cutting along the nominal
//!   path with beam on/off bracketing; no Z engagement.
//!
//! Both pipelines share the segment dispatch rule: straight segments lower
//! to linear moves, arc segments to clockwise or counter-clockwise arc
//! moves with the center expressed relative to the segment start.

pub mod error;
pub mod gcode;
pub mod model;

pub use error::{ExportError, ExportResult};
pub use gcode::laser::{LaserExporter, LaserPostProcessor};
pub use gcode::mill::{MillExporter, MillPostProcessor};
pub use gcode::passes::PassIterator;
pub use model::{CutCompensation, Path, PathSettings, Task};
