//! Multi-pass mill G-code pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;

use camcut_core::{MeasurementSystem, Tool};
use camcut_geometry::{Point, Polyline};
use tracing::{debug, warn};

use crate::error::{ExportError, ExportResult};
use crate::gcode::passes::PassIterator;
use crate::gcode::postprocessor::PlaneMotion;
use crate::gcode::trace_polyline;
use crate::model::{Path, PathSettings, Task};

/// Emits mill motion commands for one path to an output sink.
///
/// XY coordinates are absolute; depth moves take a Z relative to the
/// workpiece top (negative is into the stock).
pub struct MillPostProcessor<'a, W: Write> {
    out: W,
    tool: &'a Tool,
    settings: &'a PathSettings,
}

impl<'a, W: Write> MillPostProcessor<'a, W> {
    pub fn new(out: W, tool: &'a Tool, settings: &'a PathSettings) -> Self {
        Self {
            out,
            tool,
            settings,
        }
    }

    /// Raises the tool to the configured safe height. Idempotent; callable
    /// at path start and end.
    pub fn retract_depth(&mut self) -> ExportResult<()> {
        writeln!(self.out, "G0 Z{:.3}", self.tool.params.retract_height)?;
        Ok(())
    }

    /// Starts the spindle ahead of the cutting passes. Emitted exactly
    /// once per polyline.
    pub fn pre_cut(&mut self) -> ExportResult<()> {
        writeln!(self.out, "M3 S{}", self.settings.intensity)?;
        Ok(())
    }

    /// Stops the spindle after the cutting passes. Emitted exactly once
    /// per polyline.
    pub fn post_cut(&mut self) -> ExportResult<()> {
        writeln!(self.out, "M5")?;
        Ok(())
    }

    /// Controlled-feed plunge to a depth relative to the workpiece top.
    pub fn depth_linear_move(&mut self, z: f64) -> ExportResult<()> {
        writeln!(self.out, "G1 Z{:.3} F{:.0}", z, self.settings.depth_feed_rate)?;
        Ok(())
    }
}

impl<W: Write> PlaneMotion for MillPostProcessor<'_, W> {
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

/// Lowers a task into multi-pass mill G-code.
///
/// Per path: rapid to the polyline start, spindle on, then one cutting
/// pass per depth step with the plunge clamped to the path's total depth,
/// then retract and spindle off. Open polylines alternate direction
/// between passes.
pub struct MillExporter<'a> {
    tool: &'a Tool,
    units: MeasurementSystem,
}

impl<'a> MillExporter<'a> {
    pub fn new(tool: &'a Tool) -> Self {
        Self {
            tool,
            units: MeasurementSystem::default(),
        }
    }

    pub fn with_units(mut self, units: MeasurementSystem) -> Self {
        self.units = units;
        self
    }

    /// Exports the task to any output sink.
    ///
    /// Configuration is validated before the first command is emitted, so
    /// a configuration error never leaves partial output behind.
    pub fn export<W: Write>(&self, task: &Task, mut out: W) -> ExportResult<()> {
        let params = &self.tool.params;
        if params.depth_per_pass <= 0.0 {
            return Err(ExportError::Configuration(format!(
                "depth per pass must be positive, got {}",
                params.depth_per_pass
            )));
        }

        debug!(paths = task.len(), tool = %self.tool.id, "starting mill export");
        self.write_header(task, &mut out)?;
        for path in task.paths() {
            self.export_path(path, &mut out)?;
        }
        self.write_footer(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Exports the task to a file, failing fast if the file cannot be
    /// created. A file that errors mid-write must be discarded.
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
        writeln!(out, "; Mill toolpath generated by camcut")?;
        writeln!(
            out,
            "; Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            out,
            "; Tool: {} ({:.3} mm diameter)",
            self.tool.name, self.tool.diameter
        )?;
        writeln!(
            out,
            "; Depth per pass: {:.3} mm",
            self.tool.params.depth_per_pass
        )?;
        writeln!(out, "; Paths: {}", task.len())?;
        writeln!(out, ";")?;
        writeln!(out, "G90 ; Absolute positioning")?;
        match self.units {
            MeasurementSystem::Metric => writeln!(out, "G21 ; Millimeter units")?,
            MeasurementSystem::Imperial => writeln!(out, "G20 ; Inch units")?,
        }
        writeln!(out, "G17 ; XY plane")?;
        // Retract before any planar motion; the machine's starting Z is unknown.
        writeln!(out, "G0 Z{:.3}", self.tool.params.retract_height)?;
        Ok(())
    }

    fn write_footer<W: Write>(&self, out: &mut W) -> ExportResult<()> {
        writeln!(out)?;
        writeln!(out, "G0 X{:.3} Y{:.3} ; Return to origin", 0.0, 0.0)?;
        writeln!(out, "M2 ; End of program")?;
        Ok(())
    }

    fn export_path<W: Write>(&self, path: &Path, out: &mut W) -> ExportResult<()> {
        let settings = path.settings();
        if settings.depth <= 0.0 {
            warn!(
                path = path.name(),
                depth = settings.depth,
                "skipping path with no cutting depth"
            );
            return Ok(());
        }

        let polylines = path.final_polylines(self.tool.diameter);
        if polylines.is_empty() {
            warn!(
                path = path.name(),
                "offset removed all geometry, skipping path"
            );
            return Ok(());
        }

        writeln!(out, "; Path: {}", path.name())?;
        let mut processor = MillPostProcessor::new(out, self.tool, settings);
        for polyline in &polylines {
            processor.fast_plane_move(polyline.start())?;
            processor.pre_cut()?;
            self.export_passes(&mut processor, polyline, settings.depth)?;
            processor.retract_depth()?;
            processor.post_cut()?;
        }
        Ok(())
    }

    /// Runs the depth-pass loop over one polyline.
    ///
    /// The plunge target is clamped so the final pass lands exactly on
    /// `max_depth` even when it is not a multiple of the per-pass depth.
    fn export_passes<W: Write>(
        &self,
        processor: &mut MillPostProcessor<'_, W>,
        polyline: &Polyline,
        max_depth: f64,
    ) -> ExportResult<()> {
        let cut_depth = self.tool.params.depth_per_pass;
        let mut passes = PassIterator::new(polyline);
        let mut depth = cut_depth;
        while depth < max_depth + cut_depth {
            let bound_depth = depth.min(max_depth);
            processor.depth_linear_move(-bound_depth)?;
            trace_polyline(processor, passes.current())?;
            passes.advance();
            depth += cut_depth;
        }
        Ok(())
    }
}
