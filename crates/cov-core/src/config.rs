//! Planner configuration.
//!
//! Typically loaded from a TOML file by the application crate and passed to
//! the planner.  Every field has a default, so a partial file (or none at
//! all) is valid input.

use crate::{Cell, CoreError, CoreResult};

/// Energy units consumed by one move between adjacent cells.
pub const ENERGY_PER_STEP: u32 = 1;

/// Regions with fewer Free cells than this are not planned; their cells are
/// only ever entered as transit.
pub const MIN_REGION_CELLS: usize = 4;

// ── EnergyConfig ──────────────────────────────────────────────────────────────

/// Battery parameters handed to the energy supervisor at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EnergyConfig {
    /// Full-charge capacity.  The agent starts every mission at this level.
    pub max_energy: u32,

    /// A charging detour is considered once the charge is at or below this
    /// level after a step.
    pub low_energy_threshold: u32,

    /// Require the route back from the charger to the resume cell to fit in
    /// a full charge, and prefer a charger whose return leaves the agent above
    /// `low_energy_threshold`.  A nearer charger that brings the agent back
    /// low is still taken when no charger meets the preference.
    pub require_round_trip: bool,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            max_energy:           300,
            low_energy_threshold: 60,
            require_round_trip:   true,
        }
    }
}

impl EnergyConfig {
    /// Reject parameter combinations the supervisor cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_energy == 0 {
            return Err(CoreError::Config("max_energy must be positive".into()));
        }
        if self.low_energy_threshold >= self.max_energy {
            return Err(CoreError::Config(format!(
                "low_energy_threshold ({}) must be below max_energy ({})",
                self.low_energy_threshold, self.max_energy
            )));
        }
        Ok(())
    }

    /// `true` once `charge` is at or below the low-energy threshold.
    #[inline]
    pub fn is_low(&self, charge: u32) -> bool {
        charge <= self.low_energy_threshold
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Top-level planning configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlannerConfig {
    pub energy: EnergyConfig,

    /// Explicit start cell.  When `None` the planner uses the grid's `*`
    /// marker, then the first Free cell in row-major order.
    pub start: Option<Cell>,
}

impl PlannerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.energy.validate()
    }
}
