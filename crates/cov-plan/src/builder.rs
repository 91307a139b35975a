//! Fluent builder for constructing a [`CoveragePlanner`].

use tracing::debug;

use cov_core::{Cell, CellKind, Grid, PlannerConfig};
use cov_spatial::{segment, Router};

use crate::{CoveragePlanner, PlanError, PlanResult};

/// Fluent builder for [`CoveragePlanner<R>`].
///
/// # Required inputs
///
/// - [`Grid`]: the occupancy grid to cover
/// - `R: Router`: the routing algorithm (e.g. [`cov_spatial::BfsRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                          |
/// |---------------|--------------------------------------------------|
/// | `.config(c)`  | `PlannerConfig::default()`                       |
/// | `.start(c)`   | `config.start`, then the `*` marker, then the first Free cell |
///
/// # Example
///
/// ```rust,ignore
/// let grid = load_grid(Path::new("map.txt"))?;
/// let planner = PlannerBuilder::new(grid, BfsRouter)
///     .config(config)
///     .build()?;
/// let report = planner.run(&mut NoopObserver)?;
/// ```
pub struct PlannerBuilder<R: Router> {
    grid:   Grid,
    router: R,
    config: Option<PlannerConfig>,
    start:  Option<Cell>,
}

impl<R: Router> PlannerBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(grid: Grid, router: R) -> Self {
        Self {
            grid,
            router,
            config: None,
            start:  None,
        }
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start the mission at `cell`, overriding `config.start`.
    pub fn start(mut self, cell: Cell) -> Self {
        self.start = Some(cell);
        self
    }

    /// Validate inputs, resolve the start cell, segment the grid, and return
    /// a ready-to-run [`CoveragePlanner`].
    ///
    /// # Errors
    ///
    /// - [`PlanError::Config`] if the energy parameters are invalid.
    /// - [`PlanError::InvalidStart`] if an explicit start is a wall or off
    ///   the grid.
    /// - [`PlanError::NoStart`] if no start is given and the grid has no
    ///   Free cell.
    pub fn build(self) -> PlanResult<CoveragePlanner<R>> {
        let mut config = self.config.unwrap_or_default();
        if self.start.is_some() {
            config.start = self.start;
        }
        config.validate()?;

        let start = resolve_start(&self.grid, config.start)?;
        let segmentation = segment(&self.grid);
        debug!(
            start = %start,
            width = self.grid.width(),
            height = self.grid.height(),
            regions = segmentation.len(),
            "planner built"
        );

        Ok(CoveragePlanner {
            grid:   self.grid,
            config,
            router: self.router,
            segmentation,
            start,
        })
    }
}

/// Explicit start, then the grid's `*` marker, then the first Free cell.
fn resolve_start(grid: &Grid, explicit: Option<Cell>) -> PlanResult<Cell> {
    if let Some(cell) = explicit {
        return if grid.is_traversable(cell, true) {
            Ok(cell)
        } else {
            Err(PlanError::InvalidStart(cell))
        };
    }
    grid.start_marker()
        .or_else(|| grid.cells_of(CellKind::Free).next())
        .ok_or(PlanError::NoStart)
}
