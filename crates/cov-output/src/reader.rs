//! Waypoint file reader.
//!
//! Accepts both the plain and the energy-annotated format.  Lines starting
//! with `#` and blank lines are skipped.

use std::io::Read;
use std::path::Path;

use cov_core::Cell;

use crate::{OutputError, OutputResult, WaypointRecord};

/// Read a waypoint file.
pub fn read_waypoints(path: &Path) -> OutputResult<Vec<WaypointRecord>> {
    let file = std::fs::File::open(path)?;
    read_waypoints_reader(file)
}

/// Like [`read_waypoints`] but accepts any `Read` source.
pub fn read_waypoints_reader<R: Read>(mut reader: R) -> OutputResult<Vec<WaypointRecord>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_waypoints(&text)
}

/// Parse waypoint text.  Line numbers in errors are 1-based.
pub fn parse_waypoints(text: &str) -> OutputResult<Vec<WaypointRecord>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| {
            parse_line(line).map_err(|message| OutputError::Parse { line: n, message })
        })
        .collect()
}

fn parse_line(line: &str) -> Result<WaypointRecord, String> {
    let inner = line
        .strip_prefix('(')
        .ok_or_else(|| format!("expected '(' at start of {line:?}"))?;
    let close = inner.find(')').ok_or_else(|| format!("missing ')' in {line:?}"))?;
    let (row, col) = inner[..close]
        .split_once(',')
        .ok_or_else(|| format!("expected \"row, col\" in {line:?}"))?;
    let cell = Cell::new(parse_u32(row)?, parse_u32(col)?);

    let mut record = WaypointRecord::plain(cell);
    let mut rest = inner[close + 1..].trim_start();
    while !rest.is_empty() {
        let (content, tail) = rest
            .strip_prefix('[')
            .and_then(|r| r.split_once(']'))
            .ok_or_else(|| format!("malformed annotation {rest:?}"))?;
        match content.trim() {
            "LOW" => record.low = true,
            other => match other.strip_prefix("Energy:") {
                Some(n) => record.energy = Some(parse_u32(n)?),
                None => return Err(format!("unknown annotation [{other}]")),
            },
        }
        rest = tail.trim_start();
    }
    Ok(record)
}

fn parse_u32(s: &str) -> Result<u32, String> {
    s.trim().parse().map_err(|_| format!("invalid number {:?}", s.trim()))
}
