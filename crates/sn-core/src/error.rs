//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they surface core failures.

use thiserror::Error;

/// Errors produced by `sn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown travel mode {0:?} (expected walk, moped or car)")]
    UnknownMode(String),

    #[error("invalid base speed {0} m/s (must be finite and positive)")]
    InvalidSpeed(f64),
}

/// Shorthand result type for `sn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
