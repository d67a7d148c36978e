//! Line-or-arc segments encoded with the bulge convention.
//!
//! A tangent of 0 encodes a straight line. A nonzero tangent encodes a
//! circular arc with `tangent = tan(included_angle / 4)`; positive values
//! sweep counter-clockwise from start to end, negative values clockwise.
//! This is the same convention DXF and cavalier_contours use, so segments
//! round-trip through the offset binding without conversion.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::point::Point;

/// Rotation sense of an arc segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// Center, radius and rotation sense of an arc segment.
///
/// Computed on demand by [`Bulge::to_circle`]; never stored, so it cannot
/// drift out of sync with the segment's endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    orientation: Orientation,
}

impl Circle {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// A single path segment, either a straight line or a circular arc.
///
/// Immutable value type apart from [`Bulge::invert`]; copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bulge {
    start: Point,
    end: Point,
    tangent: f64,
}

impl Bulge {
    pub fn new(start: Point, end: Point, tangent: f64) -> Self {
        Self {
            start,
            end,
            tangent,
        }
    }

    /// Straight segment between two points.
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(start, end, 0.0)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn tangent(&self) -> f64 {
        self.tangent
    }

    pub fn is_line(&self) -> bool {
        self.tangent == 0.0
    }

    /// A zero-length segment carries no geometry; producers must collapse
    /// or reject it before building a polyline.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Reverses traversal direction while keeping the same physical curve:
    /// endpoints swap and the rotation sense flips.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.tangent = -self.tangent;
    }

    /// Returns the inverted copy without mutating `self`.
    pub fn inverse(&self) -> Self {
        let mut inverted = *self;
        inverted.invert();
        inverted
    }

    /// Derives the arc's circle from the chord and tangent.
    ///
    /// Fails with [`GeometryError::LineHasNoArc`] on straight segments and
    /// [`GeometryError::DegenerateBulge`] on zero-length ones.
    pub fn to_circle(&self) -> GeometryResult<Circle> {
        if self.is_line() {
            return Err(GeometryError::LineHasNoArc);
        }
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateBulge {
                x: self.start.x,
                y: self.start.y,
            });
        }

        let chord = self.end - self.start;
        let chord_length = self.start.distance_to(&self.end);
        let tangent = self.tangent.abs();

        // Bulge identities: sagitta = t * chord / 2, radius from the
        // inscribed-angle relation, center along the chord normal.
        let radius = chord_length * (tangent * tangent + 1.0) / (4.0 * tangent);
        let sagitta = tangent * chord_length / 2.0;
        let apothem = radius - sagitta;

        let mut normal = Point::new(-chord.y / chord_length, chord.x / chord_length);
        if self.tangent < 0.0 {
            normal = Point::new(-normal.x, -normal.y);
        }

        let center = self.start.midpoint(&self.end) + normal * apothem;
        let orientation = if self.tangent < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        };

        Ok(Circle {
            center,
            radius,
            orientation,
        })
    }
}
