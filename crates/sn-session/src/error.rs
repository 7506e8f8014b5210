use thiserror::Error;

use sn_core::CoreError;
use sn_spatial::SpatialError;
use sn_traffic::TrafficError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Coordinates cannot be snapped onto a network without nodes.
    #[error("the road network has no nodes")]
    EmptyNetwork,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Traffic(#[from] TrafficError),
}

pub type SessionResult<T> = Result<T, SessionError>;
