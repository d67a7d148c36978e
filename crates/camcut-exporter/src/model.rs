//! Task, path and per-path settings consumed by the exporters.

use camcut_geometry::Polyline;
use serde::{Deserialize, Serialize};

/// Per-path cutting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Total depth to cut below the workpiece top, in mm.
    pub depth: f64,
    /// Feed rate for planar cutting moves, in mm/min.
    pub plane_feed_rate: f64,
    /// Feed rate for plunge moves, in mm/min.
    pub depth_feed_rate: f64,
    /// S-word value: spindle speed for milling, beam power for laser.
    pub intensity: u32,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            depth: 3.0,
            plane_feed_rate: 600.0,
            depth_feed_rate: 300.0,
            intensity: 12000,
        }
    }
}

/// Which side of the nominal path the milling tool travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutCompensation {
    /// Cut along the nominal path.
    None,
    /// Offset by the tool radius toward the interior of a closed
    /// counter-clockwise path (inner contour / hole).
    Inner,
    /// Offset by the tool radius away from the interior (outer contour).
    Outer,
}

/// One cutting path: nominal geometry plus its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    name: String,
    polyline: Polyline,
    settings: PathSettings,
    compensation: CutCompensation,
}

impl Path {
    pub fn new(name: impl Into<String>, polyline: Polyline, settings: PathSettings) -> Self {
        Self {
            name: name.into(),
            polyline,
            settings,
            compensation: CutCompensation::None,
        }
    }

    pub fn with_compensation(mut self, compensation: CutCompensation) -> Self {
        self.compensation = compensation;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nominal polyline, as drawn. The laser pipeline cuts along this.
    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn settings(&self) -> &PathSettings {
        &self.settings
    }

    pub fn compensation(&self) -> CutCompensation {
        self.compensation
    }

    /// Resolves the polylines a milling tool of the given diameter actually
    /// traces. Offsetting may split the path on self-intersections or erode
    /// it away entirely, so zero or more polylines come back.
    pub fn final_polylines(&self, tool_diameter: f64) -> Vec<Polyline> {
        let radius = tool_diameter / 2.0;
        match self.compensation {
            CutCompensation::None => vec![self.polyline.clone()],
            CutCompensation::Inner => self.polyline.offsetted(radius),
            CutCompensation::Outer => self.polyline.offsetted(-radius),
        }
    }
}

/// An ordered collection of paths exported as one program.
///
/// Paths are visited in insertion order; the order is part of the emitted
/// program and must stay stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    paths: Vec<Path>,
}

impl Task {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camcut_geometry::{Bulge, Point, Polyline};

    fn segment() -> Polyline {
        Polyline::new(vec![Bulge::line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        )])
        .unwrap()
    }

    #[test]
    fn test_paths_keep_insertion_order() {
        let mut task = Task::default();
        for name in ["first", "second", "third"] {
            task.push(Path::new(name, segment(), PathSettings::default()));
        }
        let names: Vec<&str> = task.paths().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_no_compensation_keeps_nominal_polyline() {
        let path = Path::new("nominal", segment(), PathSettings::default());
        let finals = path.final_polylines(6.0);
        assert_eq!(finals.len(), 1);
        assert_eq!(&finals[0], path.polyline());
    }

    #[test]
    fn test_inner_compensation_offsets_geometry() {
        let square = Polyline::from_vertices(
            &[
                (Point::new(0.0, 0.0), 0.0),
                (Point::new(10.0, 0.0), 0.0),
                (Point::new(10.0, 10.0), 0.0),
                (Point::new(0.0, 10.0), 0.0),
            ],
            true,
        )
        .unwrap();
        let path = Path::new("pocket", square, PathSettings::default())
            .with_compensation(CutCompensation::Inner);
        let finals = path.final_polylines(2.0);
        assert_eq!(finals.len(), 1);
        assert_ne!(&finals[0], path.polyline());
    }

    #[test]
    fn test_task_serde_roundtrip() {
        let task = Task::new(vec![Path::new("p", segment(), PathSettings::default())]);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.paths()[0].name(), "p");
    }
}
