//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! The planner and the energy supervisor call routing through the
//! [`Router`] trait, so applications can swap in a different search (A*,
//! jump-point search) without touching the planning core.  The default
//! [`BfsRouter`] is exact for the unit-cost 4-connected grid.
//!
//! # Search spaces
//!
//! A query runs over a [`SearchSpace`]: either an explicit cell set (used for
//! region-local moves inside the sweep planner) or the whole grid filtered to
//! Free cells, optionally admitting Charger cells as transit.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use cov_core::{Cell, Direction, Grid};

use crate::SpatialError;

/// Set of cells keyed by coordinate.  FxHash is used because keys are small
/// integers and the sets are rebuilt per query.
pub type CellSet = FxHashSet<Cell>;

// ── SearchSpace ───────────────────────────────────────────────────────────────

/// The cells a route may pass through.
#[derive(Clone, Copy)]
pub enum SearchSpace<'a> {
    /// Only the given cells (region-restricted search).
    Cells(&'a CellSet),
    /// Free cells of the grid, plus Charger cells when `allow_chargers`.
    Grid { grid: &'a Grid, allow_chargers: bool },
}

impl SearchSpace<'_> {
    /// `true` if a route may enter `cell`.
    #[inline]
    pub fn admits(&self, cell: Cell) -> bool {
        match self {
            SearchSpace::Cells(set) => set.contains(&cell),
            SearchSpace::Grid { grid, allow_chargers } => grid.is_traversable(cell, *allow_chargers),
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: every cell from start to goal inclusive.
///
/// Consecutive cells are always 4-adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<Cell>,
}

impl Route {
    /// Number of moves (one less than the number of cells).
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// `true` if start and goal are the same cell.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() <= 1
    }

    /// The cells after the start, which an agent standing at the start
    /// actually moves through.
    pub fn steps(&self) -> &[Cell] {
        self.cells.get(1..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// workers when region sweeps are planned in parallel.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` through `space`.
    ///
    /// `from` itself need not be admitted by `space` (an agent may start on
    /// a charger); `to` must be.  `from == to` yields a one-cell route.
    fn route(&self, space: &SearchSpace<'_>, from: Cell, to: Cell) -> Result<Route, SpatialError>;
}

impl<R: Router + ?Sized> Router for &R {
    fn route(&self, space: &SearchSpace<'_>, from: Cell, to: Cell) -> Result<Route, SpatialError> {
        (**self).route(space, from, to)
    }
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over unit-cost 4-connected moves.
///
/// BFS guarantees the minimum hop count.  Neighbor expansion is biased
/// toward the goal (the axis with the larger remaining delta first), which
/// only decides *which* of several equally short paths is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, space: &SearchSpace<'_>, from: Cell, to: Cell) -> Result<Route, SpatialError> {
        bfs(space, from, to)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Expansion order for a search currently at `current` heading to `goal`.
fn preferred_moves(current: Cell, goal: Cell) -> [Direction; 4] {
    let vertical = match goal.row.cmp(&current.row) {
        std::cmp::Ordering::Greater => Some(Direction::Down),
        std::cmp::Ordering::Less => Some(Direction::Up),
        std::cmp::Ordering::Equal => None,
    };
    let horizontal = match goal.col.cmp(&current.col) {
        std::cmp::Ordering::Greater => Some(Direction::Right),
        std::cmp::Ordering::Less => Some(Direction::Left),
        std::cmp::Ordering::Equal => None,
    };
    let d_row = goal.row.abs_diff(current.row);
    let d_col = goal.col.abs_diff(current.col);
    let biased = if d_row > d_col {
        [vertical, horizontal]
    } else {
        [horizontal, vertical]
    };

    let mut order = [Direction::Up; 4];
    let mut n = 0;
    for dir in biased.into_iter().flatten().chain(Direction::ALL) {
        if !order[..n].contains(&dir) {
            order[n] = dir;
            n += 1;
        }
    }
    debug_assert_eq!(n, 4);
    order
}

fn bfs(space: &SearchSpace<'_>, from: Cell, to: Cell) -> Result<Route, SpatialError> {
    if from == to {
        return Ok(Route { cells: vec![from] });
    }
    if !space.admits(to) {
        return Err(SpatialError::NotFound { from, to });
    }

    // parent[v] = cell that first reached v.  Doubles as the visited set.
    let mut parent: FxHashMap<Cell, Cell> = FxHashMap::default();
    parent.insert(from, from);

    let mut queue = VecDeque::new();
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for dir in preferred_moves(current, to) {
            let Some(next) = current.step(dir) else { continue };
            if parent.contains_key(&next) || !space.admits(next) {
                continue;
            }
            parent.insert(next, current);
            if next == to {
                return Ok(reconstruct(&parent, from, to));
            }
            queue.push_back(next);
        }
    }

    Err(SpatialError::NotFound { from, to })
}

fn reconstruct(parent: &FxHashMap<Cell, Cell>, from: Cell, to: Cell) -> Route {
    let mut cells = vec![to];
    let mut cur = to;
    while cur != from {
        cur = parent[&cur];
        cells.push(cur);
    }
    cells.reverse();
    Route { cells }
}
