//! Traffic error type.

use thiserror::Error;

use sn_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum TrafficError {
    /// Levels outside 1–7 are rejected, never clamped.
    #[error("traffic level {0} outside 1..=7")]
    InvalidLevel(i64),

    #[error("base speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error("traffic CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
