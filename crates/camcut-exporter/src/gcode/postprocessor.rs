//! Shared command-emission primitives.

use camcut_geometry::{Bulge, Orientation, Point, Polyline};

use crate::error::ExportResult;

/// Planar motion commands common to every post-processor.
///
/// Arc centers are expressed relative to the current tool position, which
/// the caller establishes with a preceding fast move to the segment start.
pub trait PlaneMotion {
    /// Rapid, non-cutting move to an XY position.
    fn fast_plane_move(&mut self, target: Point) -> ExportResult<()>;

    /// Straight cutting move to an XY position.
    fn plane_linear_move(&mut self, target: Point) -> ExportResult<()>;

    /// Clockwise arc to `target`, center relative to the current position.
    fn cw_arc_move(&mut self, relative_center: Point, target: Point) -> ExportResult<()>;

    /// Counter-clockwise arc to `target`, center relative to the current
    /// position.
    fn ccw_arc_move(&mut self, relative_center: Point, target: Point) -> ExportResult<()>;
}

/// Emits the cutting move for one segment.
pub(crate) fn trace_bulge<P: PlaneMotion>(processor: &mut P, bulge: &Bulge) -> ExportResult<()> {
    if bulge.is_line() {
        return processor.plane_linear_move(bulge.end());
    }

    let circle = bulge.to_circle()?;
    let relative_center = circle.center() - bulge.start();
    match circle.orientation() {
        Orientation::Clockwise => processor.cw_arc_move(relative_center, bulge.end()),
        Orientation::CounterClockwise => processor.ccw_arc_move(relative_center, bulge.end()),
    }
}

/// Emits the cutting moves for every segment of a polyline, in order.
pub(crate) fn trace_polyline<P: PlaneMotion>(
    processor: &mut P,
    polyline: &Polyline,
) -> ExportResult<()> {
    for bulge in polyline.bulges() {
        trace_bulge(processor, bulge)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camcut_geometry::GeometryError;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<String>,
    }

    impl PlaneMotion for Recorder {
        fn fast_plane_move(&mut self, target: Point) -> ExportResult<()> {
            self.commands.push(format!("fast {} {}", target.x, target.y));
            Ok(())
        }

        fn plane_linear_move(&mut self, target: Point) -> ExportResult<()> {
            self.commands.push(format!("line {} {}", target.x, target.y));
            Ok(())
        }

        fn cw_arc_move(&mut self, relative_center: Point, target: Point) -> ExportResult<()> {
            self.commands.push(format!(
                "cw {} {} -> {} {}",
                relative_center.x, relative_center.y, target.x, target.y
            ));
            Ok(())
        }

        fn ccw_arc_move(&mut self, relative_center: Point, target: Point) -> ExportResult<()> {
            self.commands.push(format!(
                "ccw {} {} -> {} {}",
                relative_center.x, relative_center.y, target.x, target.y
            ));
            Ok(())
        }
    }

    #[test]
    fn test_line_dispatches_to_linear_move() {
        let mut recorder = Recorder::default();
        let line = Bulge::line(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        trace_bulge(&mut recorder, &line).unwrap();
        assert_eq!(recorder.commands, vec!["line 4 0"]);
    }

    #[test]
    fn test_arc_dispatches_with_relative_center() {
        let mut recorder = Recorder::default();
        // semicircle from (2,0) to (4,0): center (3,0), relative (1,0)
        let ccw = Bulge::new(Point::new(2.0, 0.0), Point::new(4.0, 0.0), 1.0);
        let cw = Bulge::new(Point::new(2.0, 0.0), Point::new(4.0, 0.0), -1.0);
        trace_bulge(&mut recorder, &ccw).unwrap();
        trace_bulge(&mut recorder, &cw).unwrap();
        assert_eq!(
            recorder.commands,
            vec!["ccw 1 0 -> 4 0", "cw 1 0 -> 4 0"]
        );
    }

    #[test]
    fn test_degenerate_arc_fails_loudly() {
        let mut recorder = Recorder::default();
        let degenerate = Bulge::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 1.0);
        let result = trace_bulge(&mut recorder, &degenerate);
        assert!(matches!(
            result,
            Err(crate::error::ExportError::Geometry(
                GeometryError::DegenerateBulge { .. }
            ))
        ));
        assert!(recorder.commands.is_empty());
    }
}
