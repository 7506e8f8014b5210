use thiserror::Error;

use sn_graph::GraphError;

#[derive(Debug, Error)]
pub enum DiscretizeError {
    #[error("discretization configuration error: {0}")]
    Config(String),

    #[error(
        "synthetic id pool exhausted: id #{requested} requested but the pool holds only {pool_size}"
    )]
    IdPoolExhausted {
        pool_size: usize,
        requested: usize,
    },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type DiscretizeResult<T> = Result<T, DiscretizeError>;
