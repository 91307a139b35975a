//! Boustrophedon ("lawnmower") coverage of a single region.
//!
//! Rows are swept top to bottom, the first left to right and each following
//! row in the opposite direction.  Whenever the next cell is not adjacent to
//! the current one (row change, obstacle gap) the region-restricted router
//! bridges the gap and the whole bridge is appended, revisits included.
//! Cells the sweep could not bridge to are retried nearest-first at the end;
//! a cell with no route at all is dropped.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use cov_core::Cell;
use cov_spatial::{CellSet, Region, Router, SearchSpace};

/// Result of sweeping one region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    /// Starts at the region anchor; every consecutive pair is 4-adjacent.
    pub path:    Vec<Cell>,
    /// Region cells no route could reach.
    pub dropped: Vec<Cell>,
}

impl SweepPlan {
    pub fn first(&self) -> Option<Cell> {
        self.path.first().copied()
    }
}

/// Where the planner enters `region` when arriving from elsewhere.
///
/// The door nearest the bounding-box corner `(min_row, min_col)`; without
/// doors, the corner itself if it belongs to the region, else the region cell
/// nearest to it.  Ties go to the smaller cell.
pub fn entry_point(region: &Region) -> Cell {
    let corner = region.bounds().corner();
    let nearest = |cells: &[Cell]| cells.iter().copied().min_by_key(|c| (c.manhattan(corner), *c));

    if let Some(door) = nearest(region.doors()) {
        return door;
    }
    if region.contains(corner) {
        return corner;
    }
    nearest(region.cells()).unwrap_or_else(|| region.anchor())
}

/// Sweep `region` starting from its anchor.
pub fn sweep_region<R: Router>(region: &Region, router: &R) -> SweepPlan {
    let space = SearchSpace::Cells(region.members());

    let mut rows: BTreeMap<u32, Vec<Cell>> = BTreeMap::new();
    for &cell in region.cells() {
        rows.entry(cell.row).or_default().push(cell);
    }

    let anchor = region.anchor();
    let mut sweep = Sweep {
        path:    vec![anchor],
        visited: CellSet::default(),
    };
    sweep.visited.insert(anchor);

    for (i, cells) in rows.values_mut().enumerate() {
        cells.sort_unstable();
        if i % 2 == 1 {
            cells.reverse();
        }
        for &cell in cells.iter() {
            if sweep.visited.contains(&cell) {
                continue;
            }
            // Unbridgeable cells fall through to the cleanup pass.
            sweep.reach(router, &space, cell);
        }
    }

    let mut remaining: BTreeSet<Cell> = region
        .cells()
        .iter()
        .copied()
        .filter(|c| !sweep.visited.contains(c))
        .collect();
    let mut dropped = Vec::new();

    while let Some(target) = nearest(&remaining, sweep.current()) {
        remaining.remove(&target);
        if sweep.visited.contains(&target) {
            continue;
        }
        if !sweep.reach(router, &space, target) {
            dropped.push(target);
        }
    }

    if !dropped.is_empty() {
        debug!(region = %region.id(), dropped = dropped.len(), "sweep left cells unreachable");
    }

    SweepPlan {
        path: sweep.path,
        dropped,
    }
}

/// The cell of `set` closest to `from` (Manhattan), smallest cell on ties.
fn nearest(set: &BTreeSet<Cell>, from: Cell) -> Option<Cell> {
    // BTreeSet iterates in ascending order, so `min_by_key` keeps the first
    // (smallest) cell among equal distances.
    set.iter().copied().min_by_key(|c| c.manhattan(from))
}

struct Sweep {
    path:    Vec<Cell>,
    visited: CellSet,
}

impl Sweep {
    fn current(&self) -> Cell {
        self.path[self.path.len() - 1]
    }

    /// Move to `target`, routing around gaps.  Returns `false` if no route
    /// exists within the region.
    fn reach<R: Router>(&mut self, router: &R, space: &SearchSpace<'_>, target: Cell) -> bool {
        let current = self.current();
        if current.is_adjacent(target) {
            self.visit(target);
            return true;
        }
        match router.route(space, current, target) {
            Ok(route) => {
                for &cell in route.steps() {
                    self.visit(cell);
                }
                true
            }
            Err(_) => false,
        }
    }

    fn visit(&mut self, cell: Cell) {
        self.path.push(cell);
        self.visited.insert(cell);
    }
}
