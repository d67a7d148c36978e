//! Parallel-offset binding.
//!
//! Offsetting is delegated to cavalier_contours; this module only converts
//! between the crate's bulge model and the library's vertex representation.
//! Self-intersections may split the offset curve or remove it entirely, so
//! an offset yields zero or more polylines and every caller must handle
//! both outcomes.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, Polyline as CavcPolyline};
use tracing::debug;

use crate::bulge::Bulge;
use crate::point::Point;
use crate::polyline::Polyline;

impl Polyline {
    /// Returns the polylines parallel to this one at the given signed
    /// perpendicular distance.
    ///
    /// For a closed counter-clockwise polyline a positive distance offsets
    /// toward the interior. Fully eroded geometry yields an empty vector.
    pub fn offsetted(&self, distance: f64) -> Vec<Polyline> {
        let closed = self.is_closed();

        let mut source = CavcPolyline::new();
        for bulge in self.bulges() {
            let start = bulge.start();
            source.add(start.x, start.y, bulge.tangent());
        }
        if !closed {
            let end = self.end();
            source.add(end.x, end.y, 0.0);
        }
        source.set_is_closed(closed);

        let offset_plines = source.parallel_offset(distance);
        debug!(
            distance,
            results = offset_plines.len(),
            "parallel offset computed"
        );

        offset_plines.iter().filter_map(from_cavc).collect()
    }
}

/// Converts a cavalier_contours polyline back into the bulge model.
///
/// Results with no traceable segment (a lone vertex) are dropped.
fn from_cavc(pline: &CavcPolyline<f64>) -> Option<Polyline> {
    let vertex_count = pline.vertex_count();
    let segment_count = if pline.is_closed() {
        vertex_count
    } else {
        vertex_count.saturating_sub(1)
    };
    if segment_count == 0 {
        return None;
    }

    let mut bulges = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let vertex = pline.at(i);
        let next = pline.at((i + 1) % vertex_count);
        bulges.push(Bulge::new(
            Point::new(vertex.x, vertex.y),
            Point::new(next.x, next.y),
            vertex.bulge,
        ));
    }
    Polyline::new(bulges).ok()
}
