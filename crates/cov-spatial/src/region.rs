//! Region segmentation: connected components of Free cells.
//!
//! [`segment`] flood-fills the grid breadth-first over 4-neighborhoods,
//! seeding a new region at each unvisited Free cell in row-major order.
//! Region ids follow discovery order.  Every Free cell belongs to exactly
//! one region; regions smaller than [`MIN_REGION_CELLS`] are still reported
//! (the partition stays exact) but [`Segmentation::plannable`] skips them.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use cov_core::{Cell, CellKind, Grid, MIN_REGION_CELLS};

use crate::CellSet;

// ── RegionId ──────────────────────────────────────────────────────────────────

/// Index of a region in [`Segmentation::regions`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl RegionId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

// ── RoomKind ──────────────────────────────────────────────────────────────────

/// Coarse classification from area, aspect ratio, and door count.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomKind {
    SmallRoom,
    Corridor,
    MediumRoom,
    LargeRoom,
    MainRoom,
}

impl RoomKind {
    /// | Area     | Condition        | Kind          |
    /// |----------|------------------|---------------|
    /// | < 10     |                  | `SmallRoom`   |
    /// | < 30     | aspect > 3       | `Corridor`    |
    /// | < 30     | otherwise        | `MediumRoom`  |
    /// | ≥ 30     | doors > 2        | `MainRoom`    |
    /// | ≥ 30     | otherwise        | `LargeRoom`   |
    pub fn classify(area: usize, aspect_ratio: f32, doors: usize) -> Self {
        if area < 10 {
            RoomKind::SmallRoom
        } else if area < 30 {
            if aspect_ratio > 3.0 {
                RoomKind::Corridor
            } else {
                RoomKind::MediumRoom
            }
        } else if doors > 2 {
            RoomKind::MainRoom
        } else {
            RoomKind::LargeRoom
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomKind::SmallRoom => "small_room",
            RoomKind::Corridor => "corridor",
            RoomKind::MediumRoom => "medium_room",
            RoomKind::LargeRoom => "large_room",
            RoomKind::MainRoom => "main_room",
        })
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive bounding box.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl Bounds {
    fn around(cells: &[Cell]) -> Self {
        let mut b = Bounds {
            min_row: u32::MAX,
            max_row: 0,
            min_col: u32::MAX,
            max_col: 0,
        };
        for c in cells {
            b.min_row = b.min_row.min(c.row);
            b.max_row = b.max_row.max(c.row);
            b.min_col = b.min_col.min(c.col);
            b.max_col = b.max_col.max(c.col);
        }
        b
    }

    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    /// The top-left corner `(min_row, min_col)`; not necessarily a region cell.
    pub fn corner(&self) -> Cell {
        Cell::new(self.min_row, self.min_col)
    }

    /// Midpoint, rounded toward the top-left.
    pub fn center(&self) -> Cell {
        Cell::new(
            (self.min_row + self.max_row) / 2,
            (self.min_col + self.max_col) / 2,
        )
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// A maximal 4-connected set of Free cells plus derived descriptors.
#[derive(Clone, Debug)]
pub struct Region {
    id:      RegionId,
    /// Cells in flood-fill discovery order.
    cells:   Vec<Cell>,
    members: CellSet,
    bounds:  Bounds,
    /// Sorted, de-duplicated.
    doors:   Vec<Cell>,
    kind:    RoomKind,
}

impl Region {
    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Membership set, usable directly as a [`SearchSpace::Cells`](crate::SearchSpace).
    pub fn members(&self) -> &CellSet {
        &self.members
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.members.contains(&cell)
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// `max(width, height) / min(width, height)` of the bounding box.
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = (self.bounds.width(), self.bounds.height());
        w.max(h) as f32 / w.min(h) as f32
    }

    pub fn doors(&self) -> &[Cell] {
        &self.doors
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn center(&self) -> Cell {
        self.bounds.center()
    }

    /// Lexicographically smallest cell: the top row's leftmost cell.
    pub fn anchor(&self) -> Cell {
        self.cells.iter().copied().min().unwrap_or_default()
    }

    /// Smallest Manhattan distance from `from` to any cell of the region.
    pub fn distance_to(&self, from: Cell) -> u32 {
        self.cells
            .iter()
            .map(|c| c.manhattan(from))
            .min()
            .unwrap_or(u32::MAX)
    }

    /// `true` if the region is large enough to be a coverage target.
    pub fn is_plannable(&self) -> bool {
        self.area() >= MIN_REGION_CELLS
    }
}

// ── Segmentation ──────────────────────────────────────────────────────────────

/// The full partition of a grid's Free cells into regions.
#[derive(Clone, Debug, Default)]
pub struct Segmentation {
    regions:    Vec<Region>,
    membership: FxHashMap<Cell, RegionId>,
}

impl Segmentation {
    /// All regions in discovery order, including sub-threshold slivers.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// The region owning `cell`, if it is a Free cell.
    pub fn region_of(&self, cell: Cell) -> Option<&Region> {
        self.membership.get(&cell).map(|id| &self.regions[id.index()])
    }

    /// Regions with at least [`MIN_REGION_CELLS`] cells, in discovery order.
    pub fn plannable(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(|r| r.is_plannable())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Partition the Free cells of `grid` into 4-connected regions.
pub fn segment(grid: &Grid) -> Segmentation {
    let mut membership: FxHashMap<Cell, RegionId> = FxHashMap::default();
    let mut components: Vec<Vec<Cell>> = Vec::new();

    for seed in grid.cells_of(CellKind::Free) {
        if membership.contains_key(&seed) {
            continue;
        }
        let id = RegionId(components.len() as u32);
        let mut cells = Vec::new();
        let mut queue = VecDeque::new();
        membership.insert(seed, id);
        queue.push_back(seed);

        while let Some(cell) = queue.pop_front() {
            cells.push(cell);
            for n in grid.neighbors(cell) {
                if grid.kind(n) == CellKind::Free && !membership.contains_key(&n) {
                    membership.insert(n, id);
                    queue.push_back(n);
                }
            }
        }
        components.push(cells);
    }

    let regions: Vec<Region> = components
        .into_iter()
        .enumerate()
        .map(|(i, cells)| {
            let id = RegionId(i as u32);
            let doors = find_doors(grid, id, &cells, &membership);
            let bounds = Bounds::around(&cells);
            let members: CellSet = cells.iter().copied().collect();
            let mut region = Region {
                id,
                cells,
                members,
                bounds,
                doors,
                kind: RoomKind::SmallRoom,
            };
            region.kind = RoomKind::classify(region.area(), region.aspect_ratio(), region.doors.len());
            region
        })
        .collect();

    debug!(
        regions = regions.len(),
        plannable = regions.iter().filter(|r| r.is_plannable()).count(),
        "segmented grid"
    );

    Segmentation { regions, membership }
}

/// Cells of region `id` with a 4-neighbor owned by a different region.
fn find_doors(
    grid: &Grid,
    id: RegionId,
    cells: &[Cell],
    membership: &FxHashMap<Cell, RegionId>,
) -> Vec<Cell> {
    let mut doors: Vec<Cell> = cells
        .iter()
        .copied()
        .filter(|&c| {
            grid.neighbors(c)
                .any(|n| membership.get(&n).is_some_and(|other| *other != id))
        })
        .collect();
    doors.sort_unstable();
    doors.dedup();
    doors
}
