//! Spatial-subsystem error type.

use thiserror::Error;

use sn_core::NodeId;

/// Errors produced by `sn-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// Origin or destination is not a node of the network.
    #[error("invalid endpoint: node {0} is not in the network")]
    InvalidEndpoint(NodeId),

    /// Both endpoints exist but lie in disconnected components.
    #[error("{to} is unreachable from {from}")]
    Unreachable { from: NodeId, to: NodeId },

    /// The caller's abort callback stopped the search.
    #[error("search from {from} to {to} aborted")]
    Aborted { from: NodeId, to: NodeId },

    #[error("edge {from} → {to} references a node missing from the network")]
    DanglingEdge { from: NodeId, to: NodeId },

    #[error("edge {from} → {to} has invalid length {length_m}")]
    InvalidLength { from: NodeId, to: NodeId, length_m: f64 },

    /// Consecutive route nodes with no edge between them.
    #[error("no edge {from} → {to} in the network")]
    MissingEdge { from: NodeId, to: NodeId },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
