//! `sn-discretize` — turn a raw street graph into short straight segments.
//!
//! # Pipeline
//!
//! ```text
//! raw StreetGraph ──► [manual bridges] ──► pass 1: flatten curves
//!                                       ──► pass 2: subdivide long edges ──► refined StreetGraph
//! ```
//!
//! Every node introduced along the way takes its id from a pre-generated
//! pool via the [`IdAllocator`]; running out is fatal.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`config`]      | `DiscretizeConfig` (segment length, manual-edge cap)  |
//! | [`ids`]         | `IdAllocator`, `generate_id_pool`                     |
//! | [`discretizer`] | `Discretizer`, `ManualEdge`, `DiscretizeReport`       |
//! | [`error`]       | `DiscretizeError`, `DiscretizeResult<T>`              |

pub mod config;
pub mod discretizer;
pub mod error;
pub mod ids;


pub use config::DiscretizeConfig;
pub use discretizer::{DiscretizeReport, Discretizer, ManualEdge};
pub use error::{DiscretizeError, DiscretizeResult};
pub use ids::{generate_id_pool, IdAllocator};
