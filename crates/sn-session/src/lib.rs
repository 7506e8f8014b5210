//! `sn-session` — one user's routing context.
//!
//! A [`Session`] borrows a shared, immutable [`RoadNetwork`] and owns what
//! is specific to its user: the travel mode (or explicit base speed), the
//! router, and the traffic overlay.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut session = SessionBuilder::new(&network, AStarRouter)
//!     .mode(TravelMode::Moped)
//!     .traffic(load_traffic_csv(file)?)
//!     .build()?;
//! let plan = session.plan(from, to)?;
//! println!("{:.1} m, {}", plan.route.distance_m, plan.eta);
//! ```
//!
//! [`RoadNetwork`]: sn_spatial::RoadNetwork

pub mod batch;
pub mod builder;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use batch::route_batch;
pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use session::{RoutePlan, Session};
