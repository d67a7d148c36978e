//! Single-pass laser G-code pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;

use camcut_core::MeasurementSystem;
use camcut_geometry::Point;
use tracing::debug;

use crate::error::ExportResult;
use crate::gcode::postprocessor::PlaneMotion;
use crate::gcode::trace_polyline;
use crate::model::{Path, PathSettings, Task};

/// Emits laser motion commands for one path to an output sink.
///
/// There is no Z engagement: cutting is bracketed purely by switching the
/// beam on and off.
pub struct LaserPostProcessor<'a, W: Write> {
    out: W,
    settings: &'a PathSettings,
}

impl<'a, W: Write> LaserPostProcessor<'a, W> {
    pub fn new(out: W, settings: &'a PathSettings) -> Self {
        Self { out, settings }
    }

    /// Engages the cutting beam at the path's configured power.
    pub fn laser_on(&mut self) -> ExportResult<()> {
        writeln!(self.out, "M3 S{}", self.settings.intensity)?;
        Ok(())
    }

    /// Disengages the cutting beam.
    pub fn laser_off(&mut self) -> ExportResult<()> {
        writeln!(self.out, "M5")?;
        Ok(())
    }
}

impl<W: Write> PlaneMotion for LaserPostProcessor<'_, W> {
    fn fast_plane_move(&mut self, target: Point) -> ExportResult<()> {
        writeln!(self.out, "G0 X{:.3} Y{:.3}", target.x, target.y)?;
        Ok(())
    }

    fn plane_linear_move(&mut self, target: Point) -> ExportResult<()> {
        writeln!(
            self.out,
            "G1 X{:.3} Y{:.3} F{:.0}",
            target.x, target.y, self.settings.plane_feed_rate
        )?;
        Ok(())
    }

    fn cw_arc_move(&mut self, relative_center: Point, target: Point) -> ExportResult<()> {
        writeln!(
            self.out,
            "G2 X{:.3} Y{:.3} I{:.3} J{:.3} F{:.0}",
            target.x,
            target.y,
            relative_center.x,
            relative_center.y,
            self.settings.plane_feed_rate
        )?;
        Ok(())
    }

    fn ccw_arc_move(&mut self, relative_center: Point, target: Point) -> ExportResult<()> {
        writeln!(
            self.out,
            "G3 X{:.3} Y{:.3} I{:.3} J{:.3} F{:.0}",
            target.x,
            target.y,
            relative_center.x,
            relative_center.y,
            self.settings.plane_feed_rate
        )?;
        Ok(())
    }
}

/// Lowers a task into single-pass laser G-code.
///
/// Each path is cut along its nominal polyline, exactly once: rapid to the
/// start, beam on, trace every segment, beam off. Kerf compensation is not
/// applied here.
#[derive(Debug, Default)]
pub struct LaserExporter {
    units: MeasurementSystem,
}

impl LaserExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: MeasurementSystem) -> Self {
        self.units = units;
        self
    }

    /// Exports the task to any output sink.
    pub fn export<W: Write>(&self, task: &Task, mut out: W) -> ExportResult<()> {
        debug!(paths = task.len(), "starting laser export");
        self.write_header(task, &mut out)?;
        for path in task.paths() {
            self.export_path(path, &mut out)?;
        }
        self.write_footer(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Exports the task to a file, failing fast if the file cannot be
    /// created.
    pub fn export_to_file<P: AsRef<FsPath>>(&self, task: &Task, path: P) -> ExportResult<()> {
        let file = File::create(path)?;
        self.export(task, BufWriter::new(file))
    }

    /// Exports the task into a string.
    pub fn export_to_string(&self, task: &Task) -> ExportResult<String> {
        let mut buffer = Vec::new();
        self.export(task, &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("emitted G-code is ASCII"))
    }

    fn write_header<W: Write>(&self, task: &Task, out: &mut W) -> ExportResult<()> {
        writeln!(out, "; Laser toolpath generated by camcut")?;
        writeln!(
            out,
            "; Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out, "; Paths: {}", task.len())?;
        writeln!(out, ";")?;
        writeln!(out, "G90 ; Absolute positioning")?;
        match self.units {
            MeasurementSystem::Metric => writeln!(out, "G21 ; Millimeter units")?,
            MeasurementSystem::Imperial => writeln!(out, "G20 ; Inch units")?,
        }
        writeln!(out, "G17 ; XY plane")?;
        writeln!(out, "M5 ; Laser off")?;
        Ok(())
    }

    fn write_footer<W: Write>(&self, out: &mut W) -> ExportResult<()> {
        writeln!(out)?;
        writeln!(out, "G0 X{:.3} Y{:.3} ; Return to origin", 0.0, 0.0)?;
        writeln!(out, "M2 ; End of program")?;
        Ok(())
    }

    fn export_path<W: Write>(&self, path: &Path, out: &mut W) -> ExportResult<()> {
        writeln!(out, "; Path: {}", path.name())?;
        let mut processor = LaserPostProcessor::new(out, path.settings());
        processor.fast_plane_move(path.polyline().start())?;
        processor.laser_on()?;
        trace_polyline(&mut processor, path.polyline())?;
        processor.laser_off()?;
        Ok(())
    }
}
