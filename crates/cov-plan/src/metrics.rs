//! Path quality measures.

use rustc_hash::FxHashSet;

use cov_core::{Cell, CellKind, Grid};

/// Summary of a waypoint sequence against its grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMetrics {
    /// Number of moves.
    pub length:         usize,
    /// Changes between horizontal and vertical motion.
    pub turns:          usize,
    /// Distinct Free cells visited.
    pub covered_free:   usize,
    pub total_free:     usize,
    /// `covered_free / total_free`, or 0 for a grid without Free cells.
    pub coverage_ratio: f64,
    /// Waypoints beyond the first visit of their cell.
    pub revisits:       usize,
    pub continuous:     bool,
    pub traversable:    bool,
}

impl PathMetrics {
    pub fn evaluate(grid: &Grid, path: &[Cell]) -> Self {
        let distinct: FxHashSet<Cell> = path.iter().copied().collect();
        let covered_free = distinct
            .iter()
            .filter(|&&c| grid.kind(c) == CellKind::Free)
            .count();
        let total_free = grid.free_count();
        let coverage_ratio = if total_free == 0 {
            0.0
        } else {
            covered_free as f64 / total_free as f64
        };

        Self {
            length:      path.len().saturating_sub(1),
            turns:       count_turns(path),
            covered_free,
            total_free,
            coverage_ratio,
            revisits:    path.len() - distinct.len(),
            continuous:  is_continuous(path),
            traversable: is_traversable(grid, path),
        }
    }
}

/// `true` if every consecutive pair is 4-adjacent.
pub fn is_continuous(path: &[Cell]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

/// `true` if every waypoint is a Free or Charger cell of `grid`.
pub fn is_traversable(grid: &Grid, path: &[Cell]) -> bool {
    path.iter().all(|&c| grid.is_traversable(c, true))
}

/// Changes of motion axis along `path`.  Zero-length moves keep the
/// previous axis.
pub fn count_turns(path: &[Cell]) -> usize {
    let mut turns = 0;
    let mut previous: Option<bool> = None;
    for w in path.windows(2) {
        let horizontal = if w[0].col != w[1].col {
            true
        } else if w[0].row != w[1].row {
            false
        } else {
            continue;
        };
        if previous.is_some_and(|p| p != horizontal) {
            turns += 1;
        }
        previous = Some(horizontal);
    }
    turns
}
