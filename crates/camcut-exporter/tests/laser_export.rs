use camcut_core::MeasurementSystem;
use camcut_exporter::{LaserExporter, Path, PathSettings, Task};
use camcut_geometry::{Point, Polyline};

fn settings() -> PathSettings {
    PathSettings {
        depth: 0.0,
        plane_feed_rate: 600.0,
        depth_feed_rate: 300.0,
        intensity: 800,
    }
}

fn square() -> Polyline {
    Polyline::from_vertices(
        &[
            (Point::new(5.0, 5.0), 0.0),
            (Point::new(15.0, 5.0), 0.0),
            (Point::new(15.0, 15.0), 0.0),
            (Point::new(5.0, 15.0), 0.0),
        ],
        true,
    )
    .unwrap()
}

fn open_chain() -> Polyline {
    Polyline::from_vertices(
        &[
            (Point::new(2.0, 2.0), 0.0),
            (Point::new(12.0, 2.0), 0.0),
            (Point::new(12.0, 12.0), 0.0),
        ],
        false,
    )
    .unwrap()
}

fn cutting_moves(gcode: &str) -> Vec<&str> {
    gcode
        .lines()
        .filter(|l| l.starts_with("G1 ") || l.starts_with("G2 ") || l.starts_with("G3 "))
        .collect()
}

#[test]
fn test_single_pass_beam_bracketing() {
    let task = Task::new(vec![Path::new("square", square(), settings())]);
    let gcode = LaserExporter::new().export_to_string(&task).unwrap();

    // exactly one pass: four cutting moves, one beam-on
    assert_eq!(cutting_moves(&gcode).len(), 4);
    assert_eq!(gcode.matches("M3 S800").count(), 1);

    let fast_move = gcode.find("G0 X5.000 Y5.000").expect("approach move");
    let beam_on = gcode.find("M3 S800").unwrap();
    let first_cut = gcode.find("G1 X15.000 Y5.000 F600").unwrap();
    assert!(fast_move < beam_on && beam_on < first_cut);

    // beam is off after the path
    let beam_off = gcode.rfind("\nM5").unwrap();
    assert!(beam_off > first_cut);
}

#[test]
fn test_no_depth_engagement() {
    let task = Task::new(vec![Path::new("square", square(), settings())]);
    let gcode = LaserExporter::new().export_to_string(&task).unwrap();
    assert!(!gcode.contains('Z'), "laser programs carry no Z words");
}

#[test]
fn test_open_path_traced_once_forward() {
    let task = Task::new(vec![Path::new("chain", open_chain(), settings())]);
    let gcode = LaserExporter::new().export_to_string(&task).unwrap();

    assert_eq!(
        cutting_moves(&gcode),
        vec!["G1 X12.000 Y2.000 F600", "G1 X12.000 Y12.000 F600"]
    );
}

#[test]
fn test_arc_segment_emits_arc_move() {
    let dome = Polyline::from_vertices(
        &[
            (Point::new(0.0, 0.0), 1.0),
            (Point::new(10.0, 0.0), 0.0),
        ],
        true,
    )
    .unwrap();
    let task = Task::new(vec![Path::new("dome", dome, settings())]);
    let gcode = LaserExporter::new().export_to_string(&task).unwrap();

    assert!(
        gcode.contains("G3 X10.000 Y0.000 I5.000 J0.000 F600"),
        "positive tangent lowers to a counter-clockwise arc:\n{gcode}"
    );
}

#[test]
fn test_beam_disabled_between_paths() {
    let task = Task::new(vec![
        Path::new("first", square(), settings()),
        Path::new("second", open_chain(), settings()),
    ]);
    let gcode = LaserExporter::new().export_to_string(&task).unwrap();

    let m3_count = gcode.matches("M3").count();
    let m5_count = gcode.matches("M5").count();
    assert_eq!(m3_count, 2);
    assert!(
        m5_count >= m3_count,
        "beam must be off after each path"
    );

    // second path's approach happens with the beam off
    let second_path = gcode.find("; Path: second").unwrap();
    let last_off_before = gcode[..second_path].rfind("M5").unwrap();
    let first_on_before = gcode[..second_path].rfind("M3").unwrap();
    assert!(last_off_before > first_on_before);
}

#[test]
fn test_imperial_preamble() {
    let task = Task::new(vec![Path::new("square", square(), settings())]);
    let gcode = LaserExporter::new()
        .with_units(MeasurementSystem::Imperial)
        .export_to_string(&task)
        .unwrap();

    assert!(gcode.contains("G20 ; Inch units"));
    assert!(!gcode.contains("G21"));
}
