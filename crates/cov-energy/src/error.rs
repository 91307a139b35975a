use cov_core::{Cell, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyError {
    #[error("energy configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("waypoints {from} and {to} are not adjacent")]
    Discontinuity { from: Cell, to: Cell },
}

pub type EnergyResult<T> = Result<T, EnergyError>;
