//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `cov-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Structural input error: empty grid, ragged rows, or an unknown token.
    /// Fatal: planning cannot start.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `cov-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
