//! The growing output sequence of a coverage plan.

use cov_core::Cell;

use crate::{PlanError, PlanResult};

/// Owns the waypoint sequence while a plan is stitched together from
/// transit routes and region sweeps.
///
/// Consecutive duplicates are dropped on `push`, so route segments that share
/// their first cell with the previous segment's last cell can be appended
/// as-is.  Any other non-adjacent cell is rejected.
#[derive(Debug, Clone, Default)]
pub struct WaypointAssembler {
    path: Vec<Cell>,
}

impl WaypointAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `cell`.
    ///
    /// # Errors
    ///
    /// [`PlanError::Discontinuity`] if `cell` is neither the current last
    /// waypoint nor 4-adjacent to it.
    pub fn push(&mut self, cell: Cell) -> PlanResult<()> {
        match self.path.last() {
            Some(&last) if last == cell => Ok(()),
            Some(&last) if !last.is_adjacent(cell) => {
                Err(PlanError::Discontinuity { from: last, to: cell })
            }
            _ => {
                self.path.push(cell);
                Ok(())
            }
        }
    }

    /// Append every cell of `cells` in order.
    pub fn extend(&mut self, cells: &[Cell]) -> PlanResult<()> {
        cells.iter().try_for_each(|&c| self.push(c))
    }

    pub fn last(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The finished sequence: continuous and free of consecutive repeats.
    pub fn finish(self) -> Vec<Cell> {
        self.path
    }
}
