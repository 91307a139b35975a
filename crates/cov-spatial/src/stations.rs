//! Charging-station lookup.
//!
//! Charger cells are bulk-loaded into an R-tree (via `rstar`).  A budget
//! query first pulls every station within Euclidean radius `budget` (a
//! superset of the Manhattan ball of the same radius), then filters by exact
//! Manhattan distance.  Results are ordered nearest-first with the cell
//! itself as the tie-breaker so the supervisor's choice is deterministic.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use cov_core::{Cell, Grid};

// ── R-tree station entry ──────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct StationEntry {
    point: [i64; 2], // [row, col]
    cell:  Cell,
}

impl RTreeObject for StationEntry {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationEntry {
    fn distance_2(&self, point: &[i64; 2]) -> i64 {
        let dr = self.point[0] - point[0];
        let dc = self.point[1] - point[1];
        dr.saturating_mul(dr).saturating_add(dc.saturating_mul(dc))
    }
}

#[inline]
fn to_point(cell: Cell) -> [i64; 2] {
    [cell.row as i64, cell.col as i64]
}

// ── StationIndex ──────────────────────────────────────────────────────────────

/// Spatial index over charger cells.
pub struct StationIndex {
    tree: RTree<StationEntry>,
}

impl StationIndex {
    pub fn new(stations: &[Cell]) -> Self {
        let entries = stations
            .iter()
            .map(|&cell| StationEntry { point: to_point(cell), cell })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Index every Charger cell of `grid`.
    pub fn from_grid(grid: &Grid) -> Self {
        Self::new(grid.chargers())
    }

    /// Stations within Manhattan distance `budget` of `from`, nearest first.
    pub fn within(&self, from: Cell, budget: u32) -> Vec<Cell> {
        let radius = budget as i64;
        let mut hits: Vec<(u32, Cell)> = self
            .tree
            .locate_within_distance(to_point(from), radius.saturating_mul(radius))
            .map(|e| (e.cell.manhattan(from), e.cell))
            .filter(|&(d, _)| d <= budget)
            .collect();
        hits.sort_unstable();
        hits.into_iter().map(|(_, cell)| cell).collect()
    }

    /// The station with the smallest Manhattan distance to `from`.
    pub fn nearest(&self, from: Cell) -> Option<Cell> {
        self.tree
            .iter()
            .map(|e| (e.cell.manhattan(from), e.cell))
            .min()
            .map(|(_, cell)| cell)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
