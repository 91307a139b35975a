//! `cov-plan`: coverage planning and mission orchestration.
//!
//! # Pipeline
//!
//! ```text
//! PlannerBuilder::build:
//!   validate config, resolve start (override → `*` marker → first Free cell),
//!   segment the grid into regions
//!
//! CoveragePlanner::plan:
//!   ① Order  : start region first, then greedy nearest from each center
//!   ② Sweep  : boustrophedon per region (parallel with `parallel`)
//!   ③ Stitch : transit → entry → anchor → sweep, via WaypointAssembler
//!
//! CoveragePlanner::run:
//!   plan, then EnergySupervisor inserts charging detours
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Plans region sweeps on Rayon's thread pool.            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on result types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cov_core::{parse_grid, PlannerConfig};
//! use cov_plan::{NoopObserver, PlannerBuilder};
//! use cov_spatial::BfsRouter;
//!
//! let grid = parse_grid("0 0 0\n0 1 0\n0 0 2\n")?;
//! let planner = PlannerBuilder::new(grid, BfsRouter)
//!     .config(PlannerConfig::default())
//!     .build()?;
//! let report = planner.run(&mut NoopObserver)?;
//! ```

pub mod assembler;
pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod planner;
pub mod sweep;


pub use assembler::WaypointAssembler;
pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use metrics::{count_turns, is_continuous, is_traversable, PathMetrics};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{CoveragePlan, CoveragePlanner, CoverageStatus, MissionReport};
pub use sweep::{entry_point, sweep_region, SweepPlan};
