//! Depth-pass polyline selection.

use camcut_geometry::Polyline;

/// Selects which orientation of a polyline the Nth cutting pass traces.
///
/// A closed loop has no direction of return, so every pass repeats the
/// original. An open polyline alternates between the original and its
/// precomputed inverse so each pass starts where the previous one ended
/// instead of rapid-traversing back to the original start.
///
/// Iteration length is controlled externally by the depth loop; there is
/// no terminal state.
#[derive(Debug)]
pub struct PassIterator<'a> {
    odd: bool,
    closed: bool,
    polyline: &'a Polyline,
    inverse: Option<Polyline>,
}

impl<'a> PassIterator<'a> {
    pub fn new(polyline: &'a Polyline) -> Self {
        let closed = polyline.is_closed();
        Self {
            odd: true,
            closed,
            polyline,
            inverse: (!closed).then(|| polyline.inverse()),
        }
    }

    /// The polyline the current pass should trace.
    pub fn current(&self) -> &Polyline {
        if self.closed || self.odd {
            self.polyline
        } else {
            self.inverse
                .as_ref()
                .expect("open polylines precompute their inverse")
        }
    }

    /// Advances the parity; called once per depth pass.
    pub fn advance(&mut self) {
        self.odd = !self.odd;
    }
}
