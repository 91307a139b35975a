//! Plain data types written and read by the waypoint backends.

use cov_core::{Cell, EnergyConfig, ENERGY_PER_STEP};
use cov_energy::EnergyLogEntry;

/// One line of a waypoint file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointRecord {
    pub cell:   Cell,
    /// Charge after reaching `cell`; `None` in plain files.
    pub energy: Option<u32>,
    pub low:    bool,
}

impl WaypointRecord {
    pub fn plain(cell: Cell) -> Self {
        Self { cell, energy: None, low: false }
    }
}

impl From<&EnergyLogEntry> for WaypointRecord {
    fn from(entry: &EnergyLogEntry) -> Self {
        Self {
            cell:   entry.position,
            energy: Some(entry.energy),
            low:    entry.low,
        }
    }
}

/// Battery parameters printed in the energy file's comment header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyHeader {
    pub max_energy:           u32,
    pub energy_per_step:      u32,
    pub low_energy_threshold: u32,
}

impl From<&EnergyConfig> for EnergyHeader {
    fn from(config: &EnergyConfig) -> Self {
        Self {
            max_energy:           config.max_energy,
            energy_per_step:      ENERGY_PER_STEP,
            low_energy_threshold: config.low_energy_threshold,
        }
    }
}
