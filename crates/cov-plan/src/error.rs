use cov_core::{Cell, CoreError};
use cov_energy::EnergyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("start cell {0} is not a free cell of the grid")]
    InvalidStart(Cell),

    #[error("grid has no free cell to start from")]
    NoStart,

    #[error("waypoints {from} and {to} are not adjacent")]
    Discontinuity { from: Cell, to: Cell },

    #[error("energy supervision failed: {0}")]
    Energy(#[from] EnergyError),
}

pub type PlanResult<T> = Result<T, PlanError>;
