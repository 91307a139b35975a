//! Unit tests for cov-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn manhattan_and_adjacency() {
        let a = Cell::new(2, 3);
        assert_eq!(a.manhattan(Cell::new(5, 1)), 5);
        assert!(a.is_adjacent(Cell::new(1, 3)));
        assert!(a.is_adjacent(Cell::new(2, 4)));
        assert!(!a.is_adjacent(Cell::new(3, 4))); // diagonal
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn step_underflow_is_none() {
        assert_eq!(Cell::new(0, 0).step(Direction::Up), None);
        assert_eq!(Cell::new(0, 0).step(Direction::Left), None);
        assert_eq!(Cell::new(0, 0).step(Direction::Down), Some(Cell::new(1, 0)));
    }

    #[test]
    fn direction_between() {
        let c = Cell::new(4, 4);
        assert_eq!(Direction::between(c, Cell::new(3, 4)), Some(Direction::Up));
        assert_eq!(Direction::between(c, Cell::new(4, 5)), Some(Direction::Right));
        assert_eq!(Direction::between(c, Cell::new(5, 5)), None);
    }

    #[test]
    fn display_matches_waypoint_format() {
        assert_eq!(Cell::new(3, 14).to_string(), "(3, 14)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, CellKind, CoreError, Grid};

    use CellKind::{Charger as C, Free as F, Wall as W};

    #[test]
    fn empty_grid_is_malformed() {
        assert!(matches!(Grid::from_rows(vec![]), Err(CoreError::MalformedGrid(_))));
        assert!(matches!(Grid::from_rows(vec![vec![]]), Err(CoreError::MalformedGrid(_))));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let err = Grid::from_rows(vec![vec![F, F], vec![F]]).unwrap_err();
        assert!(matches!(&err, CoreError::MalformedGrid(msg) if msg == "row 2 has 1 cells, expected 2"));
    }

    #[test]
    fn kind_and_bounds() {
        let g = Grid::from_rows(vec![vec![F, W], vec![C, F]]).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 2);
        assert_eq!(g.kind(Cell::new(0, 1)), W);
        assert_eq!(g.kind(Cell::new(1, 0)), C);
        assert!(g.contains(Cell::new(1, 1)));
        assert!(!g.contains(Cell::new(2, 0)));
        // Out of bounds reads as a wall.
        assert_eq!(g.kind(Cell::new(9, 9)), W);
    }

    #[test]
    fn cells_of_row_major() {
        let g = Grid::from_rows(vec![vec![F, W, F], vec![W, F, C]]).unwrap();
        let free: Vec<_> = g.cells_of(F).collect();
        assert_eq!(free, vec![Cell::new(0, 0), Cell::new(0, 2), Cell::new(1, 1)]);
        assert_eq!(g.chargers(), &[Cell::new(1, 2)]);
        assert_eq!(g.free_count(), 3);
    }

    #[test]
    fn traversability() {
        let g = Grid::from_rows(vec![vec![F, W, C]]).unwrap();
        assert!(g.is_traversable(Cell::new(0, 0), false));
        assert!(!g.is_traversable(Cell::new(0, 1), true));
        assert!(!g.is_traversable(Cell::new(0, 2), false));
        assert!(g.is_traversable(Cell::new(0, 2), true));
    }

    #[test]
    fn neighbors_clip_to_bounds() {
        let g = Grid::from_rows(vec![vec![F; 3]; 3]).unwrap();
        assert_eq!(g.neighbors(Cell::new(0, 0)).count(), 2);
        assert_eq!(g.neighbors(Cell::new(1, 1)).count(), 4);
        assert_eq!(g.neighbors(Cell::new(2, 1)).count(), 3);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_grid_reader, parse_grid, Cell, CellKind, CoreError};

    #[test]
    fn parses_tokens_and_markers() {
        let g = parse_grid("* 0 1\n0 2 #\n").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.kind(Cell::new(0, 0)), CellKind::Free);
        assert_eq!(g.kind(Cell::new(1, 2)), CellKind::Free);
        assert_eq!(g.start_marker(), Some(Cell::new(0, 0)));
        assert_eq!(g.goal_marker(), Some(Cell::new(1, 2)));
        assert_eq!(g.chargers(), &[Cell::new(1, 1)]);
    }

    #[test]
    fn blank_lines_and_extra_spaces_ignored() {
        let g = parse_grid("\n0   0\n\n  1 0  \n\n").unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.kind(Cell::new(1, 0)), CellKind::Wall);
    }

    #[test]
    fn unknown_token_rejected() {
        let err = parse_grid("0 0\n0 x\n").unwrap_err();
        assert!(matches!(&err, CoreError::MalformedGrid(msg) if msg.contains("\"x\"")));
        assert!(matches!(&err, CoreError::MalformedGrid(msg) if msg.starts_with("line 2, column 2:")));
    }

    #[test]
    fn ragged_text_rejected() {
        let err = parse_grid("0 0 0\n\n0 0\n").unwrap_err();
        assert!(matches!(&err, CoreError::MalformedGrid(msg) if msg == "line 3 has 2 cells, expected 3"));
    }

    #[test]
    fn empty_text_rejected() {
        assert!(matches!(parse_grid("\n\n"), Err(CoreError::MalformedGrid(_))));
    }

    #[test]
    fn grid_parse_matches_parse_grid() {
        let text = "0 2\n1 0\n";
        assert_eq!(crate::Grid::parse(text).unwrap(), parse_grid(text).unwrap());
    }

    #[test]
    fn reader_variant() {
        let g = load_grid_reader(Cursor::new("0 1\n1 0\n")).unwrap();
        assert_eq!(g.free_count(), 2);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, EnergyConfig, PlannerConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.energy.max_energy, 300);
        assert_eq!(cfg.energy.low_energy_threshold, 60);
        assert!(cfg.energy.require_round_trip);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = EnergyConfig { max_energy: 0, low_energy_threshold: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn threshold_must_be_below_capacity() {
        let cfg = EnergyConfig { max_energy: 10, low_energy_threshold: 10, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn is_low_inclusive() {
        let cfg = EnergyConfig { max_energy: 10, low_energy_threshold: 3, ..Default::default() };
        assert!(cfg.is_low(3));
        assert!(!cfg.is_low(4));
    }
}
