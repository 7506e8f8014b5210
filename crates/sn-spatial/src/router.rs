//! Routing trait, A* and Dijkstra implementations.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so the search strategy can be
//! swapped without touching the session layer.  [`AStarRouter`] is the
//! default; [`DijkstraRouter`] runs the same search with a zero heuristic and
//! serves as the optimality reference.
//!
//! # Cost units
//!
//! Costs are edge lengths in **metres** (`f64`).  Congestion never enters
//! the search: travel time is estimated afterwards from the chosen path.
//!
//! # Heuristic
//!
//! A* uses the geodesic distance from a node to the destination.  It never
//! overestimates as long as every edge is at least as long as the straight
//! line between its endpoints, which holds for coordinate-derived lengths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use sn_core::{GeoPoint, NodeId};

use crate::network::RoadNetwork;
use crate::{SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the ordered node path and its length.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes from origin to destination, both included.
    pub nodes: Vec<NodeId>,
    /// Sum of edge lengths along `nodes`, in metres.
    pub distance_m: f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consecutive `(from, to)` pairs, i.e. the edges traversed.
    pub fn segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Display polyline of the whole route.
    ///
    /// Curved edges contribute their stored geometry, all others a straight
    /// segment.  Vertices shared by consecutive edges appear once.
    pub fn geometry(&self, network: &RoadNetwork) -> Vec<GeoPoint> {
        let mut line: Vec<GeoPoint> = Vec::with_capacity(self.nodes.len());
        if let Some(first) = self.origin().and_then(|n| network.position(n)) {
            line.push(first);
        }

        for (from, to) in self.segments() {
            match network.edge_geometry(from, to) {
                Some(curve) => {
                    let skip = usize::from(line.last() == curve.first());
                    line.extend_from_slice(&curve[skip..]);
                }
                None => line.extend(network.position(to)),
            }
        }
        line
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads when routing request batches.  All search state is local
/// to a call.
pub trait Router: Send + Sync {
    /// Compute the shortest route from `from` to `to`.
    ///
    /// `from == to` yields a trivial one-node route of 0 m rather than an
    /// error.
    fn route(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Route> {
        self.route_with_abort(network, from, to, &|| false)
    }

    /// Like [`route`](Self::route), but polls `abort` between queue pops
    /// and gives up with [`SpatialError::Aborted`] once it returns `true`.
    fn route_with_abort(
        &self,
        network: &RoadNetwork,
        from:    NodeId,
        to:      NodeId,
        abort:   &dyn Fn() -> bool,
    ) -> SpatialResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* search guided by the geodesic distance to the destination.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route_with_abort(
        &self,
        network: &RoadNetwork,
        from:    NodeId,
        to:      NodeId,
        abort:   &dyn Fn() -> bool,
    ) -> SpatialResult<Route> {
        let target = endpoint_pos(network, to)?;
        search(network, from, to, |pos| pos.distance_m(target), abort)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Uninformed Dijkstra search.  Explores more nodes than A* but needs no
/// coordinates.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route_with_abort(
        &self,
        network: &RoadNetwork,
        from:    NodeId,
        to:      NodeId,
        abort:   &dyn Fn() -> bool,
    ) -> SpatialResult<Route> {
        endpoint_pos(network, to)?;
        search(network, from, to, |_| 0.0, abort)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn endpoint_pos(network: &RoadNetwork, node: NodeId) -> SpatialResult<GeoPoint> {
    network.position(node).ok_or(SpatialError::InvalidEndpoint(node))
}

/// Queue entry.  `Ord` is reversed so `BinaryHeap` (a max-heap) pops the
/// lowest `f` first; ties go to the smaller `h`, then the smaller node id,
/// which keeps searches deterministic.
#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    f:    f64,
    h:    f64,
    g:    f64,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

fn search(
    network:   &RoadNetwork,
    from:      NodeId,
    to:        NodeId,
    heuristic: impl Fn(GeoPoint) -> f64,
    abort:     &dyn Fn() -> bool,
) -> SpatialResult<Route> {
    endpoint_pos(network, from)?;
    if from == to {
        return Ok(Route { nodes: vec![from], distance_m: 0.0 });
    }

    // best_g[v] = best known distance (m) to reach v.
    let mut best_g: FxHashMap<NodeId, f64> = FxHashMap::default();
    // prev[v] = predecessor of v on the best known path.
    let mut prev: FxHashMap<NodeId, NodeId> = FxHashMap::default();

    best_g.insert(from, 0.0);
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry { f: 0.0, h: 0.0, g: 0.0, node: from });

    while let Some(QueueEntry { g, node, .. }) = heap.pop() {
        if abort() {
            return Err(SpatialError::Aborted { from, to });
        }

        if node == to {
            return Ok(reconstruct(&prev, from, to, g));
        }

        // Skip stale heap entries.
        if best_g.get(&node).is_some_and(|&best| g > best) {
            continue;
        }

        for &(neighbor, length_m) in network.neighbors(node) {
            let new_g = g + length_m;
            if best_g.get(&neighbor).is_none_or(|&old| new_g < old) {
                best_g.insert(neighbor, new_g);
                prev.insert(neighbor, node);

                let h = network.position(neighbor).map_or(0.0, &heuristic);
                heap.push(QueueEntry { f: new_g + h, h, g: new_g, node: neighbor });
            }
        }
    }

    Err(SpatialError::Unreachable { from, to })
}

fn reconstruct(prev: &FxHashMap<NodeId, NodeId>, from: NodeId, to: NodeId, distance_m: f64) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                nodes.push(p);
                cur = p;
            }
            None => break,
        }
    }
    nodes.reverse();
    Route { nodes, distance_m }
}
