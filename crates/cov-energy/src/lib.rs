//! `cov-energy`: battery accounting and charging detours.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`state`]      | `EnergyState`, `SupervisorState`, log/event records, `EnergyRun` |
//! | [`supervisor`] | `EnergySupervisor<R>`: replays a plan, inserts detours        |
//! | [`observer`]   | `EnergyObserver` callbacks, `NoopEnergyObserver`              |
//! | [`error`]      | `EnergyError`, `EnergyResult<T>`                              |
//!
//! # Energy model
//!
//! 1. The agent starts at full charge on the first plan waypoint.
//! 2. Every move costs [`ENERGY_PER_STEP`][cov_core::ENERGY_PER_STEP];
//!    entering any Charger cell resets the battery to full.
//! 3. When charge drops to the low-energy threshold after a plan step, the
//!    supervisor looks up stations via an R-tree
//!    ([`StationIndex`][cov_spatial::StationIndex]), routes to the nearest
//!    one it can reach with charge left (preferring one whose return keeps
//!    the agent above the threshold), charges, and routes back to the exact
//!    cell where the detour began.
//! 4. If no station qualifies the agent keeps going with the risk recorded;
//!    a flat battery ends the run with `MissionStatus::Exhausted`.

pub mod error;
pub mod observer;
pub mod state;
pub mod supervisor;


pub use error::{EnergyError, EnergyResult};
pub use observer::{EnergyObserver, NoopEnergyObserver};
pub use state::{
    ChargingEvent, EnergyLogEntry, EnergyRun, EnergyState, MissionStatus, SupervisorState,
};
pub use supervisor::EnergySupervisor;
