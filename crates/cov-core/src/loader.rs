//! Grid text loader.
//!
//! # Format
//!
//! One row per line, whitespace-separated tokens:
//!
//! ```text
//! 0 0 1 0
//! 0 2 1 0
//! * 0 0 #
//! ```
//!
//! | Token | Meaning                                   |
//! |-------|-------------------------------------------|
//! | `0`   | Free                                      |
//! | `1`   | Wall                                      |
//! | `2`   | Charger                                   |
//! | `*`   | Legacy start marker (read as Free)        |
//! | `#`   | Legacy goal marker (read as Free)         |
//!
//! Blank lines are skipped.  Anything else is a [`CoreError::MalformedGrid`]
//! naming the 1-based line (and column) of the text.

use std::io::Read;
use std::path::Path;

use crate::{Cell, CellKind, CoreError, CoreResult, Grid};

/// Load a grid from a text file.
pub fn load_grid(path: &Path) -> CoreResult<Grid> {
    let file = std::fs::File::open(path).map_err(CoreError::Io)?;
    load_grid_reader(file)
}

/// Like [`load_grid`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_grid_reader<R: Read>(mut reader: R) -> CoreResult<Grid> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text)
}

impl Grid {
    /// Parse a grid from its text form.  Same as [`parse_grid`].
    pub fn parse(text: &str) -> CoreResult<Self> {
        parse_grid(text)
    }
}

/// Parse a grid from its text form.
pub fn parse_grid(text: &str) -> CoreResult<Grid> {
    let mut rows: Vec<Vec<CellKind>> = Vec::new();
    let mut start = None;
    let mut goal = None;

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row_idx = rows.len() as u32;
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                let here = Cell::new(row_idx, col as u32);
                match token {
                    "0" => Ok(CellKind::Free),
                    "1" => Ok(CellKind::Wall),
                    "2" => Ok(CellKind::Charger),
                    "*" => {
                        start = Some(here);
                        Ok(CellKind::Free)
                    }
                    "#" => {
                        goal = Some(here);
                        Ok(CellKind::Free)
                    }
                    other => Err(CoreError::MalformedGrid(format!(
                        "line {line_no}, column {}: invalid token {other:?}, expected 0, 1, 2, * or #",
                        col + 1
                    ))),
                }
            })
            .collect::<CoreResult<Vec<_>>>()?;
        if let Some(width) = rows.first().map(Vec::len) {
            if row.len() != width {
                return Err(CoreError::MalformedGrid(format!(
                    "line {line_no} has {} cells, expected {width}",
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    Ok(Grid::from_rows(rows)?.with_markers(start, goal))
}
