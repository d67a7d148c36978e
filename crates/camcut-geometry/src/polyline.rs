//! Continuous segment sequences.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::bulge::Bulge;
use crate::error::{GeometryError, GeometryResult};
use crate::point::Point;

/// An ordered, continuous sequence of [`Bulge`] segments.
///
/// Non-empty by construction, so the endpoint accessors never fail.
/// "Closed" is a geometric predicate on the endpoints, recomputed on every
/// call because inversion mutates the segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    bulges: Vec<Bulge>,
}

impl Polyline {
    pub fn new(bulges: Vec<Bulge>) -> GeometryResult<Self> {
        if bulges.is_empty() {
            return Err(GeometryError::EmptyPolyline);
        }
        Ok(Self { bulges })
    }

    /// Builds a polyline from consecutive vertices, each carrying the
    /// outgoing tangent of the segment that leaves it.
    ///
    /// Closed sources wrap the last vertex back to the first, so the
    /// closing coordinate must not be repeated in `vertices`.
    pub fn from_vertices(vertices: &[(Point, f64)], closed: bool) -> GeometryResult<Self> {
        if vertices.len() < 2 {
            return Err(GeometryError::EmptyPolyline);
        }
        let segment_count = if closed {
            vertices.len()
        } else {
            vertices.len() - 1
        };
        let mut bulges = Vec::with_capacity(segment_count);
        for i in 0..segment_count {
            let (start, tangent) = vertices[i];
            let (end, _) = vertices[(i + 1) % vertices.len()];
            bulges.push(Bulge::new(start, end, tangent));
        }
        Self::new(bulges)
    }

    pub fn bulges(&self) -> &[Bulge] {
        &self.bulges
    }

    pub fn segment_count(&self) -> usize {
        self.bulges.len()
    }

    /// First segment's start point.
    pub fn start(&self) -> Point {
        // non-empty by construction
        self.bulges[0].start()
    }

    /// Last segment's end point.
    pub fn end(&self) -> Point {
        self.bulges[self.bulges.len() - 1].end()
    }

    /// Exact coordinate equality of the endpoints; a producer that wants a
    /// closed path must repeat the exact closing coordinate.
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    /// Reverses traversal in place: segment order flips and every segment
    /// is inverted, yielding the same curve traced backward.
    pub fn invert(&mut self) -> &mut Self {
        for bulge in &mut self.bulges {
            bulge.invert();
        }
        self.bulges.reverse();
        self
    }

    /// Returns the inverted copy without mutating `self`.
    pub fn inverse(&self) -> Self {
        let mut inverted = self.clone();
        inverted.invert();
        inverted
    }
}

impl AddAssign<&Polyline> for Polyline {
    /// Appends the other polyline's segments. The caller is responsible
    /// for endpoint continuity; no stitching or validation is performed.
    fn add_assign(&mut self, other: &Polyline) {
        self.bulges.extend_from_slice(other.bulges());
    }
}
