//! `cov-core`: foundational types for the `covplan` coverage planner.
//!
//! This crate is a dependency of every other `cov-*` crate.  It intentionally
//! has no `cov-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`cell`]    | `Cell`, `Direction`, Manhattan distance, adjacency       |
//! | [`grid`]    | `Grid`, `CellKind`: the immutable occupancy grid         |
//! | [`loader`]  | `load_grid`, `load_grid_reader`, `parse_grid`            |
//! | [`config`]  | `PlannerConfig`, `EnergyConfig`, fixed planning constants|
//! | [`error`]   | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; needed |
//! |         | to read `PlannerConfig` from TOML.                         |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod loader;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::{EnergyConfig, PlannerConfig, ENERGY_PER_STEP, MIN_REGION_CELLS};
pub use error::{CoreError, CoreResult};
pub use grid::{CellKind, Grid};
pub use loader::{load_grid, load_grid_reader, parse_grid};
