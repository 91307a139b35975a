//! Planner observer trait for progress reporting.

use cov_core::Cell;
use cov_energy::{EnergyObserver, EnergyRun};
use cov_spatial::Region;

use crate::{CoveragePlan, SweepPlan};

/// Callbacks invoked by [`CoveragePlanner::plan`][crate::CoveragePlanner::plan]
/// and [`CoveragePlanner::run`][crate::CoveragePlanner::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Energy callbacks come from the
/// [`EnergyObserver`] supertrait.
///
/// # Example: region printer
///
/// ```rust,ignore
/// struct RegionPrinter;
///
/// impl EnergyObserver for RegionPrinter {}
///
/// impl PlanObserver for RegionPrinter {
///     fn on_region_planned(&mut self, region: &Region, sweep: &SweepPlan) {
///         println!("{}: {} cells, {} waypoints", region.id(), region.area(), sweep.path.len());
///     }
/// }
/// ```
pub trait PlanObserver: EnergyObserver {
    /// Called once with the start cell and the visiting order of regions.
    fn on_plan_start(&mut self, _start: Cell, _order: &[&Region]) {}

    /// A region's sweep has been stitched into the plan.
    fn on_region_planned(&mut self, _region: &Region, _sweep: &SweepPlan) {}

    /// No transit route reaches `region`; it is skipped.
    fn on_region_unreachable(&mut self, _region: &Region) {}

    /// The coverage plan is complete (before energy supervision).
    fn on_plan_end(&mut self, _plan: &CoveragePlan) {}

    /// The energy supervisor has finished.
    fn on_mission_end(&mut self, _run: &EnergyRun) {}
}

/// A [`PlanObserver`] that does nothing.  Use when you need to call `plan` or
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl EnergyObserver for NoopObserver {}

impl PlanObserver for NoopObserver {}
