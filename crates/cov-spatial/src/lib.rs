//! `cov-spatial`: region segmentation, routing, and station lookup.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`region`]   | `segment`, `Segmentation`, `Region`, `RoomKind`, `Bounds`   |
//! | [`router`]   | `Router` trait, `Route`, `SearchSpace`, `BfsRouter`         |
//! | [`stations`] | `StationIndex` (R-tree over charger cells)                  |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod region;
pub mod router;
pub mod stations;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use region::{segment, Bounds, Region, RegionId, RoomKind, Segmentation};
pub use router::{BfsRouter, CellSet, Route, Router, SearchSpace};
pub use stations::StationIndex;
