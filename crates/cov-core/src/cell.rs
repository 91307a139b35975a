//! Grid coordinates and 4-neighborhood helpers.
//!
//! A `Cell` has no identity beyond its position.  It is `Copy + Ord + Hash`
//! so it can key visited sets and sorted collections without ceremony; the
//! derived ordering is lexicographic (row first, then column), which is the
//! tie-breaking order used everywhere the planner must pick "the first" of
//! several equally good cells.

use std::fmt;

/// A `(row, col)` grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance in cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row).saturating_add(self.col.abs_diff(other.col))
    }

    /// `true` if `other` differs by exactly one unit along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }

    /// The neighbor one step in `dir`, or `None` when it would underflow.
    ///
    /// No upper bound is applied here; callers check grid bounds.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            Direction::Down => self.row.checked_add(1).map(|row| Cell::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
            Direction::Right => self.col.checked_add(1).map(|col| Cell::new(self.row, col)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((row, col): (u32, u32)) -> Cell {
        Cell::new(row, col)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order used when no goal bias applies.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `true` for `Left`/`Right`.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Direction of a single move from `from` to `to`, if they are adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        if !from.is_adjacent(to) {
            return None;
        }
        Some(match (to.row.cmp(&from.row), to.col.cmp(&from.col)) {
            (std::cmp::Ordering::Less, _) => Direction::Up,
            (std::cmp::Ordering::Greater, _) => Direction::Down,
            (_, std::cmp::Ordering::Less) => Direction::Left,
            _ => Direction::Right,
        })
    }
}
