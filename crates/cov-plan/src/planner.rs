//! The `CoveragePlanner` and its mission pipeline.

use tracing::{debug, info, warn};

use cov_core::{Cell, Grid, PlannerConfig};
use cov_energy::{EnergyRun, EnergySupervisor};
use cov_spatial::{Region, RegionId, Route, Router, SearchSpace, Segmentation};

use crate::{
    entry_point, sweep_region, PathMetrics, PlanObserver, PlanResult, SweepPlan, WaypointAssembler,
};

// ── Results ───────────────────────────────────────────────────────────────────

/// Whether every plannable region cell made it into the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverageStatus {
    Complete,
    Partial {
        /// Region cells no in-region route could reach.
        dropped:             Vec<Cell>,
        /// Regions no transit route could reach.
        unreachable_regions: Vec<RegionId>,
    },
}

impl CoverageStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, CoverageStatus::Complete)
    }
}

/// The coverage plan before energy supervision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoveragePlan {
    pub start:        Cell,
    /// Continuous, free of consecutive repeats, starting at `start`.
    pub waypoints:    Vec<Cell>,
    /// Regions actually swept, in visiting order.
    pub region_order: Vec<RegionId>,
    pub status:       CoverageStatus,
}

/// Everything [`CoveragePlanner::run`] produces.
#[derive(Debug, Clone)]
pub struct MissionReport {
    pub plan:    CoveragePlan,
    pub energy:  EnergyRun,
    /// Measured on the energy-aware path.
    pub metrics: PathMetrics,
}

// ── CoveragePlanner ───────────────────────────────────────────────────────────

/// Plans full coverage of a grid and supervises it for energy.
///
/// Pipeline:
///
/// 1. **Segment** the grid into regions; keep those with at least
///    [`MIN_REGION_CELLS`](cov_core::MIN_REGION_CELLS) cells.
/// 2. **Order** regions: the one holding the start (else the nearest), then
///    greedily the region nearest the previous region's center.
/// 3. **Sweep** each region (optionally parallel with the `parallel` feature;
///    results are consumed in region order so output is deterministic).
/// 4. **Stitch**: transit to each region's entry over the grid, route entry to
///    anchor inside the region, then append the sweep.  The region holding
///    the start is entered at the start itself.
/// 5. **Supervise** ([`run`](Self::run) only): replay the plan against the
///    battery, inserting charging detours.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct CoveragePlanner<R: Router> {
    pub(crate) grid:         Grid,
    pub(crate) config:       PlannerConfig,
    pub(crate) router:       R,
    pub(crate) segmentation: Segmentation,
    pub(crate) start:        Cell,
}

impl<R: Router> CoveragePlanner<R> {
    // ── Public API ────────────────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }

    /// The resolved start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Build the coverage plan.
    pub fn plan<O: PlanObserver>(&self, observer: &mut O) -> PlanResult<CoveragePlan> {
        let order = self.region_order();
        observer.on_plan_start(self.start, &order);
        let sweeps = self.sweep_all(&order);

        let mut out = WaypointAssembler::new();
        out.push(self.start)?;
        let mut region_order = Vec::with_capacity(order.len());
        let mut dropped = Vec::new();
        let mut unreachable_regions = Vec::new();

        for (region, sweep) in order.iter().zip(&sweeps) {
            let here = out.last().unwrap_or(self.start);
            // A region the agent already stands in is entered right there.
            let entry = if region.contains(here) { here } else { entry_point(region) };
            let Some(transit) = self.transit(here, entry) else {
                warn!(region = %region.id(), from = %here, to = %entry, "region unreachable, skipped");
                unreachable_regions.push(region.id());
                observer.on_region_unreachable(region);
                continue;
            };
            out.extend(&transit.cells)?;

            let Some(anchor) = sweep.first() else { continue };
            let local = SearchSpace::Cells(region.members());
            match self.router.route(&local, entry, anchor) {
                Ok(inward) => out.extend(&inward.cells)?,
                Err(_) => {
                    warn!(region = %region.id(), "entry cannot reach region anchor, skipped");
                    unreachable_regions.push(region.id());
                    observer.on_region_unreachable(region);
                    continue;
                }
            }
            out.extend(&sweep.path)?;

            if !sweep.dropped.is_empty() {
                warn!(region = %region.id(), cells = sweep.dropped.len(), "cells dropped from sweep");
            }
            debug!(
                region = %region.id(),
                kind = %region.kind(),
                area = region.area(),
                transit = transit.hops(),
                sweep = sweep.path.len(),
                "region planned"
            );
            dropped.extend_from_slice(&sweep.dropped);
            region_order.push(region.id());
            observer.on_region_planned(region, sweep);
        }

        let status = if dropped.is_empty() && unreachable_regions.is_empty() {
            CoverageStatus::Complete
        } else {
            CoverageStatus::Partial { dropped, unreachable_regions }
        };
        let plan = CoveragePlan {
            start:     self.start,
            waypoints: out.finish(),
            region_order,
            status,
        };
        observer.on_plan_end(&plan);
        Ok(plan)
    }

    /// Plan, then supervise the plan for energy.
    pub fn run<O: PlanObserver>(&self, observer: &mut O) -> PlanResult<MissionReport> {
        let plan = self.plan(observer)?;
        let supervisor = EnergySupervisor::new(&self.grid, self.config.energy.clone(), &self.router)?;
        let energy = supervisor.run(&plan.waypoints, observer)?;
        let metrics = PathMetrics::evaluate(&self.grid, &energy.path);

        info!(
            regions = plan.region_order.len(),
            planned = plan.waypoints.len(),
            waypoints = energy.path.len(),
            charges = energy.charging_events.len(),
            coverage = metrics.coverage_ratio,
            turns = metrics.turns,
            complete = plan.status.is_complete(),
            completed = energy.status.is_completed(),
            "mission planned"
        );
        observer.on_mission_end(&energy);

        Ok(MissionReport { plan, energy, metrics })
    }

    // ── Pipeline stages ───────────────────────────────────────────────────

    /// Plannable regions in visiting order.
    pub fn region_order(&self) -> Vec<&Region> {
        let mut remaining: Vec<&Region> = self.segmentation.plannable().collect();
        let mut order = Vec::with_capacity(remaining.len());

        let first = match self.segmentation.region_of(self.start) {
            Some(r) if r.is_plannable() => Some(r.id()),
            _ => nearest_region(&remaining, self.start),
        };
        let Some(mut next) = first else { return order };

        loop {
            let Some(pos) = remaining.iter().position(|r| r.id() == next) else { break };
            let region = remaining.remove(pos);
            order.push(region);
            match nearest_region(&remaining, region.center()) {
                Some(id) => next = id,
                None => break,
            }
        }
        order
    }

    fn sweep_all(&self, order: &[&Region]) -> Vec<SweepPlan> {
        let router = &self.router;

        #[cfg(not(feature = "parallel"))]
        {
            order.iter().map(|region| sweep_region(region, router)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            order.par_iter().map(|region| sweep_region(region, router)).collect()
        }
    }

    /// Grid route avoiding chargers, falling back to one through them.
    fn transit(&self, from: Cell, to: Cell) -> Option<Route> {
        let free_only = SearchSpace::Grid { grid: &self.grid, allow_chargers: false };
        let with_chargers = SearchSpace::Grid { grid: &self.grid, allow_chargers: true };
        self.router
            .route(&free_only, from, to)
            .or_else(|_| self.router.route(&with_chargers, from, to))
            .ok()
    }
}

/// The region with the smallest Manhattan distance from `from` to any of its
/// cells; lower id on ties.
fn nearest_region(regions: &[&Region], from: Cell) -> Option<RegionId> {
    regions
        .iter()
        .min_by_key(|r| (r.distance_to(from), r.id()))
        .map(|r| r.id())
}
