//! `sn-spatial` — road network store, spatial indexing, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (adjacency + R-tree), `RoadNetworkBuilder`    |
//! | [`router`]  | `Router` trait, `Route`, `AStarRouter`, `DijkstraRouter`    |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                         |
//!
//! Path selection is purely geometric: edge cost is length in metres and
//! congestion never changes which path is chosen.  Traffic only affects time
//! estimates (see `sn-traffic`).

pub mod error;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use network::{Directedness, RoadNetwork, RoadNetworkBuilder};
pub use router::{AStarRouter, DijkstraRouter, Route, Router};
