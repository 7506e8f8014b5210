//! Per-segment drawing instructions for a route.

use sn_core::{GeoPoint, NodeId};
use sn_spatial::{RoadNetwork, SpatialError};

use crate::{Rgb, TrafficError, TrafficLevel, TrafficLevels, TrafficResult};

/// One traversed edge, styled by its congestion level.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySegment {
    pub from:   NodeId,
    pub to:     NodeId,
    pub level:  TrafficLevel,
    pub color:  Rgb,
    pub weight: u32,
    /// Edge display geometry, or the straight segment between the endpoints.
    pub coords: Vec<GeoPoint>,
}

/// Style every edge of the node path `nodes`.
///
/// # Errors
///
/// [`SpatialError::MissingEdge`] if two consecutive nodes are not joined by
/// an edge of `network`.
pub fn overlay_segments<T: TrafficLevels + ?Sized>(
    network: &RoadNetwork,
    traffic: &T,
    nodes:   &[NodeId],
) -> TrafficResult<Vec<OverlaySegment>> {
    nodes
        .windows(2)
        .map(|w| {
            let (from, to) = (w[0], w[1]);
            let coords = match network.edge_geometry(from, to) {
                Some(curve) => curve.to_vec(),
                None => match (network.position(from), network.position(to), network.edge_length(from, to)) {
                    (Some(a), Some(b), Some(_)) => vec![a, b],
                    _ => return Err(TrafficError::from(SpatialError::MissingEdge { from, to })),
                },
            };

            let level = traffic.level(from, to);
            Ok(OverlaySegment {
                from,
                to,
                level,
                color: level.color(),
                weight: level.line_weight(),
                coords,
            })
        })
        .collect()
}
