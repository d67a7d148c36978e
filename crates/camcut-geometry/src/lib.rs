//! # camcut Geometry
//!
//! 2D path geometry for toolpath lowering.
//!
//! The model is deliberately small: a [`Bulge`] is one segment, either a
//! straight line or a circular arc encoded with a single signed tangent
//! value, and a [`Polyline`] is an ordered, continuous sequence of bulges.
//! Both support inversion (tracing the same curve backward) and
//! concatenation, which is everything the exporters need to order passes
//! and alternate direction.
//!
//! Geometric offsetting (tool-radius / kerf compensation) is bound to the
//! `cavalier_contours` library in [`offset`]; the numerical algorithm is
//! consumed, never reimplemented here.

pub mod bulge;
pub mod error;
pub mod offset;
pub mod point;
pub mod polyline;

pub use bulge::{Bulge, Circle, Orientation};
pub use error::{GeometryError, GeometryResult};
pub use point::Point;
pub use polyline::Polyline;
