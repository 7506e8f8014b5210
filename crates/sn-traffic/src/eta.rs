//! Traffic-aware travel time.

use std::fmt;

use sn_core::{validate_speed, NodeId};
use sn_spatial::{RoadNetwork, SpatialError};

use crate::{TrafficError, TrafficLevel, TrafficLevels, TrafficResult};

/// Estimated travel time of a route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Eta {
    pub total_secs: f64,
    /// Highest level met along the route.
    pub peak_level: TrafficLevel,
}

impl Eta {
    /// Whole minutes and remaining whole seconds.
    pub fn minutes_seconds(&self) -> (u64, u64) {
        let secs = self.total_secs.max(0.0) as u64;
        (secs / 60, secs % 60)
    }
}

impl fmt::Display for Eta {
    /// `< 1 min`, `12 min`, or `1 h 05 min`; partial minutes are dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes, _) = self.minutes_seconds();
        match minutes {
            0 => f.write_str("< 1 min"),
            m if m < 60 => write!(f, "{m} min"),
            m => write!(f, "{} h {:02} min", m / 60, m % 60),
        }
    }
}

/// Sum `length / base_speed * speed_factor(level)` over the consecutive node
/// pairs of `nodes`.
///
/// A route of zero or one node takes no time at level 1.
///
/// # Errors
///
/// - [`TrafficError::InvalidSpeed`] if `base_speed_mps` is not finite and
///   positive.
/// - [`SpatialError::MissingEdge`] if two consecutive nodes are not joined
///   by an edge of `network`.
pub fn estimate_time<T: TrafficLevels + ?Sized>(
    network:        &RoadNetwork,
    traffic:        &T,
    nodes:          &[NodeId],
    base_speed_mps: f64,
) -> TrafficResult<Eta> {
    let speed = validate_speed(base_speed_mps).map_err(|_| TrafficError::InvalidSpeed(base_speed_mps))?;

    let mut eta = Eta { total_secs: 0.0, peak_level: TrafficLevel::CLEAR };
    for w in nodes.windows(2) {
        let (from, to) = (w[0], w[1]);
        let length = network
            .edge_length(from, to)
            .ok_or(SpatialError::MissingEdge { from, to })?;
        let level = traffic.level(from, to);

        eta.total_secs += length / speed * level.speed_factor();
        eta.peak_level = eta.peak_level.max(level);
    }
    Ok(eta)
}
