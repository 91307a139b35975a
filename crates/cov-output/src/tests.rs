//! Integration tests for cov-output.

#[cfg(test)]
mod text_tests {
    use std::fs;

    use tempfile::TempDir;

    use cov_core::{Cell, EnergyConfig};

    use crate::writer::WaypointWriter;
    use crate::{write_waypoints, EnergyHeader, TextWriter, WaypointRecord};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn written(f: impl FnOnce(&mut TextWriter<Vec<u8>>)) -> String {
        let mut w = TextWriter::new(Vec::new());
        f(&mut w);
        w.finish().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn plain_lines() {
        let dir = tmp();
        let path = dir.path().join("waypoint.txt");
        write_waypoints(&path, &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(10, 1)]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "(0, 0)\n(0, 1)\n(10, 1)\n");
    }

    #[test]
    fn energy_header_block() {
        let cfg = EnergyConfig::default();
        let text = written(|w| w.write_header(&EnergyHeader::from(&cfg)).unwrap());
        assert_eq!(
            text,
            "# Waypoints with Energy Management\n\
             # Max Energy: 300\n\
             # Energy per move: 1\n\
             # Low energy threshold: 60\n\
             # Format: (row, col) [energy_level]\n\
             \n"
        );
    }

    #[test]
    fn energy_annotations() {
        let text = written(|w| {
            let a = WaypointRecord { cell: Cell::new(3, 4), energy: Some(61), low: false };
            let b = WaypointRecord { cell: Cell::new(3, 5), energy: Some(60), low: true };
            w.write_waypoint(&a).unwrap();
            w.write_waypoint(&b).unwrap();
        });
        assert_eq!(text, "(3, 4) [Energy: 61]\n(3, 5) [Energy: 60] [LOW]\n");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = TextWriter::create(&dir.path().join("w.txt")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod reader_tests {
    use std::io::Cursor;

    use cov_core::Cell;

    use crate::{parse_waypoints, read_waypoints_reader, OutputError, WaypointRecord};

    #[test]
    fn plain_and_annotated_lines() {
        let text = "# header\n\n(0, 0) [Energy: 300]\n(0, 1) [Energy: 59] [LOW]\n(2, 3)\n";
        let recs = parse_waypoints(text).unwrap();
        assert_eq!(
            recs,
            vec![
                WaypointRecord { cell: Cell::new(0, 0), energy: Some(300), low: false },
                WaypointRecord { cell: Cell::new(0, 1), energy: Some(59), low: true },
                WaypointRecord::plain(Cell::new(2, 3)),
            ]
        );
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let recs = read_waypoints_reader(Cursor::new("  ( 4 ,5 )   [ Energy: 7 ]  \n")).unwrap();
        assert_eq!(recs[0].cell, Cell::new(4, 5));
        assert_eq!(recs[0].energy, Some(7));
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_waypoints("(0, 0)\n# note\n(0, x)\n").unwrap_err();
        assert!(matches!(err, OutputError::Parse { line: 3, .. }));
        assert!(matches!(parse_waypoints("0, 0\n"), Err(OutputError::Parse { line: 1, .. })));
        assert!(matches!(parse_waypoints("(0, 0) [Fuel: 3]\n"), Err(OutputError::Parse { .. })));
        assert!(matches!(parse_waypoints("(0, 0) [LOW\n"), Err(OutputError::Parse { .. })));
    }
}

#[cfg(test)]
mod stream_tests {
    use std::fs;

    use cov_core::{parse_grid, Cell, EnergyConfig, PlannerConfig};
    use cov_plan::PlannerBuilder;
    use cov_spatial::BfsRouter;

    use crate::{
        read_waypoints, write_energy_waypoints, EnergyHeader, TextWriter, WaypointStream,
    };

    fn config() -> PlannerConfig {
        PlannerConfig {
            energy: EnergyConfig { max_energy: 5, low_energy_threshold: 2, require_round_trip: true },
            start:  None,
        }
    }

    #[test]
    fn stream_matches_batch_writer() {
        let grid = parse_grid("0 0 0 0 0 0\n1 1 1 2 1 1\n").unwrap();
        let planner = PlannerBuilder::new(grid, BfsRouter).config(config()).build().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let streamed = dir.path().join("streamed.txt");
        let mut obs = WaypointStream::new(
            TextWriter::create(&streamed).unwrap(),
            EnergyHeader::from(&config().energy),
        );
        let report = planner.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.written(), report.energy.path.len());
        drop(obs);

        let batch = dir.path().join("batch.txt");
        write_energy_waypoints(&batch, &report.energy, &config().energy).unwrap();
        assert_eq!(fs::read_to_string(&streamed).unwrap(), fs::read_to_string(&batch).unwrap());

        let recs = read_waypoints(&batch).unwrap();
        let cells: Vec<Cell> = recs.iter().map(|r| r.cell).collect();
        assert_eq!(cells, report.energy.path);
        assert_eq!(recs[4].energy, Some(5));
        assert!(recs[3].low);
    }
}
