//! Graph-model error type.

use thiserror::Error;

use sn_core::NodeId;

/// Errors produced by `sn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("node {0} already exists in graph")]
    DuplicateNode(NodeId),

    #[error("invalid edge data: {0}")]
    InvalidEdgeData(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
