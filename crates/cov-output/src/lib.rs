//! `cov-output`: waypoint exchange files for the covplan planner.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`text`]     | `TextWriter`, `write_waypoints`, `write_energy_waypoints`  |
//! | [`reader`]   | `read_waypoints`, `parse_waypoints`                        |
//! | [`observer`] | `WaypointStream`, writes while the supervisor runs         |
//! | [`record`]   | `WaypointRecord`, `EnergyHeader`                           |
//! | [`writer`]   | `WaypointWriter` trait                                     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use cov_output::{EnergyHeader, TextWriter, WaypointStream};
//!
//! let writer = TextWriter::create(Path::new("waypoint_energy.txt"))?;
//! let mut obs = WaypointStream::new(writer, EnergyHeader::from(&config.energy));
//! planner.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod error;
pub mod observer;
pub mod reader;
pub mod record;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use observer::WaypointStream;
pub use reader::{parse_waypoints, read_waypoints, read_waypoints_reader};
pub use record::{EnergyHeader, WaypointRecord};
pub use text::{write_energy_waypoints, write_waypoints, TextWriter};
pub use writer::WaypointWriter;
