//! The `WaypointWriter` trait implemented by waypoint backends.

use crate::{EnergyHeader, OutputResult, WaypointRecord};

/// Sink for a waypoint sequence.
pub trait WaypointWriter {
    /// Write the energy comment header.  Call at most once, before any
    /// waypoint; plain files have no header.
    fn write_header(&mut self, header: &EnergyHeader) -> OutputResult<()>;

    /// Write one waypoint line.
    fn write_waypoint(&mut self, record: &WaypointRecord) -> OutputResult<()>;

    /// Flush the underlying handle.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
