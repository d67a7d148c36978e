//! # camcut Core
//!
//! Shared data models consumed read-only by the toolpath pipelines:
//! measurement units and the tool library.

pub mod data;
pub mod units;

pub use data::tools::{
    init_standard_library, Tool, ToolCuttingParams, ToolId, ToolLibrary, ToolType,
};
pub use units::MeasurementSystem;
