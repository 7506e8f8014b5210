//! `sn-core` — foundational types for the street-network workspace.
//!
//! This crate is a dependency of every other `sn-*` crate.  It intentionally
//! has no `sn-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `NodePair`                                  |
//! | [`geo`]         | `GeoPoint`, great-circle distance, interpolation      |
//! | [`transport`]   | `TravelMode` presets and their base speeds            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `sn-graph`.                                    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{polyline_length_m, GeoPoint, EARTH_RADIUS_M};
pub use ids::{NodeId, NodePair};
pub use transport::{validate_speed, TravelMode};
