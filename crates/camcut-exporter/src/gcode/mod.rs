//! G-code lowering pipelines.
//!
//! The post-processors own the output sink and the command vocabulary; the
//! exporters own the traversal order (task, path, pass, segment). Segment
//! dispatch is shared between both pipelines through [`PlaneMotion`].

pub mod laser;
pub mod mill;
pub mod passes;
mod postprocessor;

pub use laser::{LaserExporter, LaserPostProcessor};
pub use mill::{MillExporter, MillPostProcessor};
pub use passes::PassIterator;
pub use postprocessor::PlaneMotion;

pub(crate) use postprocessor::trace_polyline;
