//! The immutable occupancy grid and its station registry.
//!
//! # Data layout
//!
//! Cell kinds are stored row-major in one flat `Vec<CellKind>`; the kind of
//! `Cell { row, col }` lives at `row * width + col`.  The charger list is
//! computed once at construction (row-major scan) and never changes, so
//! every planning component can share `&Grid` without synchronisation.

use crate::{Cell, CoreError, CoreResult, Direction};

// ── CellKind ──────────────────────────────────────────────────────────────────

/// What occupies a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Traversable floor; a coverage target.
    #[default]
    Free,
    /// Wall or obstacle; never entered.
    Wall,
    /// Charging station; restores full energy on arrival.
    Charger,
}

impl CellKind {
    /// The integer token used by the grid exchange format.
    pub fn token(self) -> char {
        match self {
            CellKind::Free => '0',
            CellKind::Wall => '1',
            CellKind::Charger => '2',
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular occupancy grid.  Dimensions are fixed at construction and the
/// grid is immutable for the duration of planning.
///
/// Construct with [`Grid::from_rows`] or one of the loaders in
/// [`crate::loader`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width:        u32,
    height:       u32,
    kinds:        Vec<CellKind>,
    chargers:     Vec<Cell>,
    start_marker: Option<Cell>,
    goal_marker:  Option<Cell>,
}

impl Grid {
    /// Build a grid from a row-major matrix of cell kinds.
    ///
    /// # Errors
    ///
    /// [`CoreError::MalformedGrid`] if the matrix is empty, any row is empty,
    /// or rows have unequal length.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> CoreResult<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(CoreError::MalformedGrid("grid is empty".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(CoreError::MalformedGrid(format!(
                "row {} has {} cells, expected {width}",
                i + 1,
                row.len()
            )));
        }
        let (width, height) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(CoreError::MalformedGrid("grid dimensions overflow u32".into())),
        };

        let kinds: Vec<CellKind> = rows.into_iter().flatten().collect();
        let chargers = kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == CellKind::Charger)
            .map(|(i, _)| Cell::new(i as u32 / width, i as u32 % width))
            .collect();

        Ok(Self {
            width,
            height,
            kinds,
            chargers,
            start_marker: None,
            goal_marker:  None,
        })
    }

    /// Attach the legacy `*` / `#` marker positions found by the loader.
    pub(crate) fn with_markers(mut self, start: Option<Cell>, goal: Option<Cell>) -> Self {
        self.start_marker = start;
        self.goal_marker = goal;
        self
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always `false` for a constructed grid; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// Bounds test.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Kind of `cell`.  Out-of-bounds cells read as [`CellKind::Wall`].
    #[inline]
    pub fn kind(&self, cell: Cell) -> CellKind {
        if self.contains(cell) {
            self.kinds[self.index(cell)]
        } else {
            CellKind::Wall
        }
    }

    /// `true` for Free cells, and for Charger cells when `allow_chargers`.
    #[inline]
    pub fn is_traversable(&self, cell: Cell, allow_chargers: bool) -> bool {
        match self.kind(cell) {
            CellKind::Free => true,
            CellKind::Charger => allow_chargers,
            CellKind::Wall => false,
        }
    }

    /// All cells of `kind` in row-major order.
    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        self.kinds
            .iter()
            .enumerate()
            .filter(move |(_, k)| **k == kind)
            .map(move |(i, _)| Cell::new(i as u32 / width, i as u32 % width))
    }

    /// Number of Free cells.
    pub fn free_count(&self) -> usize {
        self.kinds.iter().filter(|k| **k == CellKind::Free).count()
    }

    /// In-bounds 4-neighbors of `cell` in [`Direction::ALL`] order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| cell.step(d))
            .filter(move |n| self.contains(*n))
    }

    // ── Station registry ──────────────────────────────────────────────────

    /// Every charging station, row-major.
    pub fn chargers(&self) -> &[Cell] {
        &self.chargers
    }

    /// `true` if `cell` is a charging station.
    #[inline]
    pub fn is_charger(&self, cell: Cell) -> bool {
        self.kind(cell) == CellKind::Charger
    }

    // ── Legacy markers ────────────────────────────────────────────────────

    /// Position of the `*` start token, if the source had one.
    pub fn start_marker(&self) -> Option<Cell> {
        self.start_marker
    }

    /// Position of the `#` goal token, if the source had one.
    pub fn goal_marker(&self) -> Option<Cell> {
        self.goal_marker
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }
}
