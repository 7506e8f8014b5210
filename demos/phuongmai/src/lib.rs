//! Shared pieces of the `sample`, `discretize`, and `navigate` tools.
//!
//! The sample network is a hand-drawn block of streets in Phuong Mai ward,
//! Hanoi.  It exercises every discretization case: a long straight road, a
//! curved two-way lane, a one-way street, and a node that is only connected
//! once a manual bridge is added.

use sn_core::{GeoPoint, NodeId};
use sn_graph::{EdgeData, GraphResult, StreetGraph};


/// Manual bridge that connects the isolated node of [`sample_network`].
pub const SAMPLE_BRIDGE: (NodeId, NodeId) = (NodeId(303), NodeId(306));

/// The raw (unrefined) sample network.
pub fn sample_network() -> GraphResult<StreetGraph> {
    let nodes = [
        (301, 21.0030, 105.8360),
        (302, 21.0030, 105.8375),
        (303, 21.0042, 105.8375),
        (304, 21.0042, 105.8360),
        (305, 21.0036, 105.8352),
        (306, 21.0050, 105.8385),
    ];
    let mut g = StreetGraph::new();
    for (id, lat, lon) in nodes {
        g.add_node(NodeId(id), GeoPoint::new(lat, lon))?;
    }

    // Straight two-way road along the south side.
    two_way(&mut g, 301, 302, None)?;
    // One-way street heading north.
    let (a, b) = (NodeId(302), NodeId(303));
    g.add_edge(a, b, EdgeData::straight(g.endpoint_distance_m(a, b)?, true)?)?;
    // Curved lane along the north side.
    let curve = vec![
        GeoPoint::new(21.0042, 105.8375),
        GeoPoint::new(21.0046, 105.8371),
        GeoPoint::new(21.0047, 105.8365),
        GeoPoint::new(21.0042, 105.8360),
    ];
    two_way(&mut g, 303, 304, Some(curve))?;
    two_way(&mut g, 304, 305, None)?;
    two_way(&mut g, 305, 301, None)?;
    Ok(g)
}

fn two_way(g: &mut StreetGraph, a: u64, b: u64, curve: Option<Vec<GeoPoint>>) -> GraphResult<()> {
    let (a, b) = (NodeId(a), NodeId(b));
    let length = match &curve {
        Some(points) => sn_core::polyline_length_m(points),
        None => g.endpoint_distance_m(a, b)?,
    };
    let data = EdgeData::new(length, false, curve)?;
    g.add_edge(b, a, data.reversed())?;
    g.add_edge(a, b, data)?;
    Ok(())
}

// ── Argument parsing ──────────────────────────────────────────────────────────

/// Parse `lat,lon`.
pub fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `lat,lon`, got `{s}`"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("`{v}`: {e}"));
    let (lat, lon) = (parse(lat)?, parse(lon)?);
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinates out of range: {lat},{lon}"));
    }
    Ok(GeoPoint::new(lat, lon))
}

/// Parse a node pair `A:B` (a manual bridge or a batch request).
pub fn parse_node_pair(s: &str) -> Result<(NodeId, NodeId), String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `A:B`, got `{s}`"))?;
    let parse = |v: &str| v.trim().parse::<u64>().map(NodeId).map_err(|e| format!("`{v}`: {e}"));
    Ok((parse(a)?, parse(b)?))
}
