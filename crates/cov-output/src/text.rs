//! Text waypoint backend.
//!
//! Plain files hold one `(row, col)` per line.  Energy files start with a
//! `#` comment header and annotate each line:
//!
//! ```text
//! # Waypoints with Energy Management
//! # Max Energy: 300
//! # Energy per move: 1
//! # Low energy threshold: 60
//! # Format: (row, col) [energy_level]
//!
//! (0, 0) [Energy: 300]
//! (0, 1) [Energy: 299]
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cov_core::{Cell, EnergyConfig};
use cov_energy::EnergyRun;

use crate::writer::WaypointWriter;
use crate::{EnergyHeader, OutputResult, WaypointRecord};

/// Writes waypoints as text to any `Write` sink.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl TextWriter<BufWriter<File>> {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WaypointWriter for TextWriter<W> {
    fn write_header(&mut self, header: &EnergyHeader) -> OutputResult<()> {
        writeln!(self.out, "# Waypoints with Energy Management")?;
        writeln!(self.out, "# Max Energy: {}", header.max_energy)?;
        writeln!(self.out, "# Energy per move: {}", header.energy_per_step)?;
        writeln!(self.out, "# Low energy threshold: {}", header.low_energy_threshold)?;
        writeln!(self.out, "# Format: (row, col) [energy_level]")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn write_waypoint(&mut self, record: &WaypointRecord) -> OutputResult<()> {
        write!(self.out, "{}", record.cell)?;
        if let Some(energy) = record.energy {
            write!(self.out, " [Energy: {energy}]")?;
            if record.low {
                write!(self.out, " [LOW]")?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Write `cells` to `path` in the plain format.
pub fn write_waypoints(path: &Path, cells: &[Cell]) -> OutputResult<()> {
    let mut w = TextWriter::create(path)?;
    for &cell in cells {
        w.write_waypoint(&WaypointRecord::plain(cell))?;
    }
    w.finish()
}

/// Write the energy-aware path of `run` to `path` with its header.
pub fn write_energy_waypoints(path: &Path, run: &EnergyRun, config: &EnergyConfig) -> OutputResult<()> {
    let mut w = TextWriter::create(path)?;
    w.write_header(&EnergyHeader::from(config))?;
    for entry in &run.log {
        w.write_waypoint(&WaypointRecord::from(entry))?;
    }
    w.finish()
}
