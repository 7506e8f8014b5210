//! `sn-graph` — the street graph as exchanged between pipeline stages.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`edge`]     | `EdgeData` — validated length / one-way / curve record      |
//! | [`graph`]    | `StreetGraph` — editable directed graph keyed by `NodeId`   |
//! | [`document`] | `GraphDocument` JSON schema, `read_graph`, `write_graph`    |
//! | [`id_pool`]  | `read_id_pool`, `write_id_pool` (one id per line)           |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                              |
//!
//! The raw network and the refined (discretized) network share one schema;
//! the refined graph simply carries no curve geometry.

pub mod document;
pub mod edge;
pub mod error;
pub mod graph;
pub mod id_pool;


pub use document::{read_graph, read_graph_from, write_graph, write_graph_to, GraphDocument};
pub use edge::EdgeData;
pub use error::{GraphError, GraphResult};
pub use graph::StreetGraph;
pub use id_pool::{read_id_pool, read_id_pool_from, write_id_pool};
