//! `WaypointStream<W>`: bridges `PlanObserver` to a `WaypointWriter`.

use cov_energy::{EnergyLogEntry, EnergyObserver, EnergyRun};
use cov_plan::PlanObserver;
use tracing::debug;

use crate::writer::WaypointWriter;
use crate::{EnergyHeader, OutputError, OutputResult, WaypointRecord};

/// A [`PlanObserver`] that streams every energy-log entry to a
/// [`WaypointWriter`] while the supervisor runs.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `planner.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct WaypointStream<W: WaypointWriter> {
    writer:     W,
    header:     Option<EnergyHeader>,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: WaypointWriter> WaypointStream<W> {
    /// Stream annotated waypoints, preceded by `header`.
    pub fn new(writer: W, header: EnergyHeader) -> Self {
        Self {
            writer,
            header:     Some(header),
            written:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `planner.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Waypoint lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: WaypointWriter> EnergyObserver for WaypointStream<W> {
    fn on_step(&mut self, entry: &EnergyLogEntry) {
        if let Some(header) = self.header.take() {
            let result = self.writer.write_header(&header);
            self.store_err(result);
        }
        let result = self.writer.write_waypoint(&WaypointRecord::from(entry));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }
}

impl<W: WaypointWriter> PlanObserver for WaypointStream<W> {
    fn on_mission_end(&mut self, run: &EnergyRun) {
        if let Some(header) = self.header.take() {
            // Empty run: still emit the header.
            let result = self.writer.write_header(&header);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
        debug!(lines = self.written, expected = run.path.len(), "waypoint stream finished");
    }
}
