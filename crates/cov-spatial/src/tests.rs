//! Unit tests for cov-spatial.
//!
//! Grids are written inline in the `0`/`1`/`2` text format.

#[cfg(test)]
mod helpers {
    use cov_core::{parse_grid, Grid};

    pub fn grid(text: &str) -> Grid {
        parse_grid(text).expect("test grid parses")
    }

    /// 5×5 open room split by a wall column at col 2.
    pub fn bisected() -> Grid {
        grid(
            "0 0 1 0 0\n\
             0 0 1 0 0\n\
             0 0 1 0 0\n\
             0 0 1 0 0\n\
             0 0 1 0 0\n",
        )
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use cov_core::Cell;

    use super::helpers::{bisected, grid};
    use crate::{BfsRouter, CellSet, Router, SearchSpace, SpatialError};

    fn free(g: &cov_core::Grid) -> SearchSpace<'_> {
        SearchSpace::Grid { grid: g, allow_chargers: false }
    }

    fn assert_continuous(cells: &[Cell]) {
        for w in cells.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a unit move", w[0], w[1]);
        }
    }

    #[test]
    fn same_cell_is_trivial() {
        let g = grid("0 0\n0 0\n");
        let r = BfsRouter.route(&free(&g), Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert!(r.is_trivial());
        assert_eq!(r.hops(), 0);
        assert!(r.steps().is_empty());
    }

    #[test]
    fn shortest_path_around_obstacle() {
        let g = grid(
            "0 0 0 0\n\
             0 1 1 0\n\
             0 0 0 0\n",
        );
        let from = Cell::new(1, 0);
        let to = Cell::new(1, 3);
        let r = BfsRouter.route(&free(&g), from, to).unwrap();
        assert_eq!(r.hops(), 5);
        assert_eq!(r.cells.first(), Some(&from));
        assert_eq!(r.last(), Some(to));
        assert_continuous(&r.cells);
        assert!(r.cells.iter().all(|&c| g.is_traversable(c, false)));
    }

    #[test]
    fn wall_column_blocks_route() {
        let g = bisected();
        let from = Cell::new(0, 0);
        let to = Cell::new(0, 4);
        let err = BfsRouter.route(&free(&g), from, to).unwrap_err();
        assert_eq!(err, SpatialError::NotFound { from, to });
    }

    #[test]
    fn goal_on_wall_is_not_found() {
        let g = bisected();
        assert!(BfsRouter.route(&free(&g), Cell::new(0, 0), Cell::new(0, 2)).is_err());
    }

    #[test]
    fn chargers_only_when_allowed() {
        let g = grid("0 2 0\n");
        let from = Cell::new(0, 0);
        let to = Cell::new(0, 2);
        assert!(BfsRouter.route(&free(&g), from, to).is_err());
        let space = SearchSpace::Grid { grid: &g, allow_chargers: true };
        let r = BfsRouter.route(&space, from, to).unwrap();
        assert_eq!(r.cells, vec![from, Cell::new(0, 1), to]);
    }

    #[test]
    fn start_need_not_be_admitted() {
        let g = grid("2 0 0\n");
        let r = BfsRouter.route(&free(&g), Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(r.hops(), 2);
    }

    #[test]
    fn cell_set_restricts_search() {
        let allowed: CellSet =
            [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2), Cell::new(0, 2)]
                .into_iter()
                .collect();
        let r = BfsRouter
            .route(&SearchSpace::Cells(&allowed), Cell::new(0, 0), Cell::new(0, 2))
            .unwrap();
        assert_eq!(r.hops(), 4);
        assert!(!r.cells.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn bias_prefers_dominant_axis() {
        // Open 3×5: from (0,0) to (1,4) the column delta dominates, so the
        // returned path runs along row 0 before dropping down.
        let g = grid("0 0 0 0 0\n0 0 0 0 0\n0 0 0 0 0\n");
        let r = BfsRouter.route(&free(&g), Cell::new(0, 0), Cell::new(1, 4)).unwrap();
        assert_eq!(r.hops(), 5);
        assert_eq!(r.cells[1], Cell::new(0, 1));
    }
}

// ── Segmentation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod region {
    use cov_core::{Cell, CellKind};

    use super::helpers::{bisected, grid};
    use crate::{segment, RegionId, RoomKind};

    #[test]
    fn bisected_room_has_two_regions() {
        let g = bisected();
        let seg = segment(&g);
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.regions()[0].area(), 10);
        assert_eq!(seg.regions()[1].area(), 10);
        assert_eq!(seg.regions()[0].anchor(), Cell::new(0, 0));
        assert_eq!(seg.regions()[1].anchor(), Cell::new(0, 3));
        assert_eq!(seg.plannable().count(), 2);
    }

    #[test]
    fn partition_is_exact() {
        let g = grid(
            "0 0 1 0\n\
             1 0 1 0\n\
             0 1 2 0\n\
             0 0 1 1\n",
        );
        let seg = segment(&g);
        let mut seen = 0;
        for cell in g.cells_of(CellKind::Free) {
            let owners = seg.regions().iter().filter(|r| r.contains(cell)).count();
            assert_eq!(owners, 1, "{cell} owned by {owners} regions");
            seen += 1;
        }
        let total: usize = seg.regions().iter().map(|r| r.area()).sum();
        assert_eq!(total, seen);
        // Chargers and walls belong to no region.
        assert!(seg.region_of(Cell::new(2, 2)).is_none());
        assert!(seg.region_of(Cell::new(0, 2)).is_none());
    }

    #[test]
    fn ids_follow_discovery_order() {
        let g = grid("0 1 0\n");
        let seg = segment(&g);
        assert_eq!(seg.region_of(Cell::new(0, 0)).map(|r| r.id()), Some(RegionId(0)));
        assert_eq!(seg.region_of(Cell::new(0, 2)).map(|r| r.id()), Some(RegionId(1)));
    }

    #[test]
    fn small_regions_are_not_plannable() {
        let g = grid("0 0 1 0 0 0 0\n");
        let seg = segment(&g);
        assert_eq!(seg.len(), 2);
        let plannable: Vec<_> = seg.plannable().map(|r| r.area()).collect();
        assert_eq!(plannable, vec![4]);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(RoomKind::classify(9, 1.0, 0), RoomKind::SmallRoom);
        assert_eq!(RoomKind::classify(12, 6.0, 0), RoomKind::Corridor);
        assert_eq!(RoomKind::classify(12, 3.0, 0), RoomKind::MediumRoom);
        assert_eq!(RoomKind::classify(30, 1.0, 2), RoomKind::LargeRoom);
        assert_eq!(RoomKind::classify(30, 1.0, 3), RoomKind::MainRoom);
    }

    #[test]
    fn long_strip_is_corridor() {
        let g = grid("0 0 0 0 0 0 0 0 0 0 0 0\n");
        let seg = segment(&g);
        let r = &seg.regions()[0];
        assert_eq!(r.aspect_ratio(), 12.0);
        assert_eq!(r.kind(), RoomKind::Corridor);
        assert_eq!(r.kind().to_string(), "corridor");
    }

    #[test]
    fn bounds_and_distance() {
        let g = bisected();
        let seg = segment(&g);
        let right = &seg.regions()[1];
        let b = right.bounds();
        assert_eq!((b.min_row, b.max_row, b.min_col, b.max_col), (0, 4, 3, 4));
        assert_eq!(right.center(), Cell::new(2, 3));
        assert_eq!(right.distance_to(Cell::new(2, 0)), 3);
        assert!(right.doors().is_empty());
    }
}

// ── Station index ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod stations {
    use cov_core::Cell;

    use super::helpers::grid;
    use crate::StationIndex;

    #[test]
    fn empty_index() {
        let idx = StationIndex::new(&[]);
        assert!(idx.is_empty());
        assert!(idx.within(Cell::new(0, 0), 100).is_empty());
        assert_eq!(idx.nearest(Cell::new(0, 0)), None);
    }

    #[test]
    fn within_filters_by_manhattan() {
        let idx = StationIndex::new(&[Cell::new(0, 3), Cell::new(2, 2), Cell::new(5, 5)]);
        // (2,2) is Euclidean 2.83 but Manhattan 4 from the origin.
        assert_eq!(idx.within(Cell::new(0, 0), 3), vec![Cell::new(0, 3)]);
        assert_eq!(idx.within(Cell::new(0, 0), 4), vec![Cell::new(0, 3), Cell::new(2, 2)]);
    }

    #[test]
    fn ties_broken_by_cell_order() {
        let idx = StationIndex::new(&[Cell::new(2, 1), Cell::new(1, 2)]);
        assert_eq!(idx.within(Cell::new(1, 1), 1), vec![Cell::new(1, 2), Cell::new(2, 1)]);
        assert_eq!(idx.nearest(Cell::new(1, 1)), Some(Cell::new(1, 2)));
    }

    #[test]
    fn full_u32_budget() {
        let idx = StationIndex::new(&[Cell::new(4, 1), Cell::new(0, 2)]);
        assert_eq!(idx.within(Cell::new(0, 0), u32::MAX), vec![Cell::new(0, 2), Cell::new(4, 1)]);
        assert_eq!(idx.within(Cell::new(0, 0), 3_100_000_000).len(), 2);
    }

    #[test]
    fn from_grid_indexes_chargers() {
        let g = grid("0 2 0\n2 0 0\n");
        let idx = StationIndex::from_grid(&g);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.within(Cell::new(0, 0), 1), vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }
}
