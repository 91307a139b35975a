//! Spatial-subsystem error type.

use thiserror::Error;

use cov_core::Cell;

/// Errors produced by `cov-spatial`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    /// The goal is unreachable from the start under the search space's
    /// cell filter.  A normal outcome: callers fall back or drop the goal.
    #[error("no route from {from} to {to}")]
    NotFound { from: Cell, to: Cell },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
