//! Battery state, supervisor modes, and the records a run produces.

use std::fmt;

use cov_core::{Cell, ENERGY_PER_STEP};

// ── EnergyState ───────────────────────────────────────────────────────────────

/// The battery of a single agent.
///
/// `current` never exceeds `max` and never underflows: a step taken on an
/// empty battery leaves it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyState {
    pub current: u32,
    pub max:     u32,
}

impl EnergyState {
    /// A fully charged battery of capacity `max`.
    #[inline]
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Pay for one move.
    #[inline]
    pub fn consume_step(&mut self) {
        self.current = self.current.saturating_sub(ENERGY_PER_STEP);
    }

    #[inline]
    pub fn recharge(&mut self) {
        self.current = self.max;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Moves that can still be paid for.
    #[inline]
    pub fn steps_left(&self) -> u32 {
        self.current / ENERGY_PER_STEP
    }
}

// ── SupervisorState ───────────────────────────────────────────────────────────

/// What the supervisor is doing at a given step.
///
/// ```text
/// Traveling ──low──▶ LowEnergy ──station found──▶ Charging ──arrived──▶ Returning
///     ▲                  │                                                  │
///     └───no station─────┘◀────────────────back at resume cell──────────────┘
///
/// any state ──charge hits 0──▶ Exhausted (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SupervisorState {
    #[default]
    Traveling,
    LowEnergy,
    Charging,
    Returning,
    Exhausted,
}

impl fmt::Display for SupervisorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SupervisorState::Traveling => "traveling",
            SupervisorState::LowEnergy => "low_energy",
            SupervisorState::Charging => "charging",
            SupervisorState::Returning => "returning",
            SupervisorState::Exhausted => "exhausted",
        })
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

/// One entry per waypoint of the energy-aware path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyLogEntry {
    pub position: Cell,
    /// Charge after the step into `position` (and after any recharge there).
    pub energy:   u32,
    /// `true` when `energy` is at or below the low-energy threshold.
    pub low:      bool,
    pub state:    SupervisorState,
}

/// A completed charge at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargingEvent {
    pub station:      Cell,
    /// Index of the station cell in [`EnergyRun::path`].
    pub index:        usize,
    /// Charge left on arrival, before the reset.
    pub arrived_with: u32,
}

/// How a supervised run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionStatus {
    /// Every waypoint of the plan was reached.
    Completed,
    /// The battery ran flat at `at`; the path stops there.
    Exhausted { at: Cell },
}

impl MissionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, MissionStatus::Completed)
    }
}

/// Output of [`EnergySupervisor::run`](crate::EnergySupervisor::run).
///
/// `path` and `log` have the same length; `log[i]` describes `path[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyRun {
    pub path:                Vec<Cell>,
    pub log:                 Vec<EnergyLogEntry>,
    pub charging_events:     Vec<ChargingEvent>,
    pub status:              MissionStatus,
    /// Low-energy steps for which no station passed the budget check.
    pub unserved_low_energy: usize,
    pub final_energy:        u32,
}

impl EnergyRun {
    /// Steps flagged low in the log.
    pub fn low_energy_alerts(&self) -> usize {
        self.log.iter().filter(|e| e.low).count()
    }

    /// Waypoints added by charging detours.
    pub fn detour_steps(&self, planned: usize) -> usize {
        self.path.len().saturating_sub(planned)
    }
}
