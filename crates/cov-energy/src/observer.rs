//! Supervisor callbacks for progress reporting.

use cov_core::Cell;

use crate::{ChargingEvent, EnergyLogEntry};

/// Callbacks invoked by [`EnergySupervisor::run`][crate::EnergySupervisor::run]
/// as the energy-aware path is built.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait EnergyObserver {
    /// Called for every waypoint appended, including detour steps.
    fn on_step(&mut self, _entry: &EnergyLogEntry) {}

    /// A detour to `station` begins at `from`.
    fn on_detour(&mut self, _from: Cell, _station: Cell) {}

    /// The battery was reset at a station.
    fn on_charged(&mut self, _event: &ChargingEvent) {}

    /// Back at the cell where the detour began.
    fn on_resume(&mut self, _at: Cell) {}

    /// Charge is low at `at` and no station passed the budget check.
    fn on_unserved_low_energy(&mut self, _at: Cell, _energy: u32) {}

    /// The battery ran flat at `at`.  No further callbacks follow.
    fn on_exhausted(&mut self, _at: Cell) {}
}

/// An [`EnergyObserver`] that does nothing.
pub struct NoopEnergyObserver;

impl EnergyObserver for NoopEnergyObserver {}
