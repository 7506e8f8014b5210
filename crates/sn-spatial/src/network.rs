//! Read-only road network and builder.
//!
//! # Data layout
//!
//! Node ids are sparse 64-bit values, so adjacency is a hash map rather than
//! CSR arrays:
//!
//! ```text
//! adjacency[n] = [(neighbor, length_m), ...]   // outgoing edges of n
//! ```
//!
//! Lookup of a node's outgoing edges is O(1); the list itself is scanned
//! linearly, which is cheap at the degree of street intersections.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to resolve clicked or typed coordinates to road nodes before routing.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use log::debug;

use sn_core::{GeoPoint, NodeId};
use sn_graph::StreetGraph;

use crate::{SpatialError, SpatialResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries within a city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Directedness ──────────────────────────────────────────────────────────────

/// How [`RoadNetwork::from_street_graph`] treats edge direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Directedness {
    /// Edges are used exactly as stored; one-way roads stay one-way.
    #[default]
    Directed,
    /// Every edge is also traversable in reverse (pedestrian network).
    Undirected,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Immutable directed road graph plus a spatial index for node snapping.
///
/// Built once, then shared read-only (it is `Send + Sync`) by any number of
/// concurrent searches.  Construct with [`RoadNetworkBuilder`] or
/// [`RoadNetwork::from_street_graph`].
pub struct RoadNetwork {
    positions:  FxHashMap<NodeId, GeoPoint>,
    adjacency:  FxHashMap<NodeId, Vec<(NodeId, f64)>>,
    /// Display polylines of curved edges, keyed by `(from, to)`.
    geometry:   FxHashMap<(NodeId, NodeId), Vec<GeoPoint>>,
    edge_count: usize,

    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    ///
    /// Every routing request against it fails with
    /// [`SpatialError::InvalidEndpoint`].
    pub fn empty() -> Self {
        RoadNetwork {
            positions:   FxHashMap::default(),
            adjacency:   FxHashMap::default(),
            geometry:    FxHashMap::default(),
            edge_count:  0,
            spatial_idx: RTree::new(),
        }
    }

    /// Load a (refined) street graph for routing.
    ///
    /// Edge lengths and display geometry are taken from the graph as-is.
    /// With [`Directedness::Undirected`] each edge is added in reverse too,
    /// unless the graph already stores that reverse.
    pub fn from_street_graph(graph: &StreetGraph, directedness: Directedness) -> SpatialResult<Self> {
        let mut b = RoadNetworkBuilder::with_capacity(graph.node_count(), graph.edge_count());
        for (id, pos) in graph.nodes() {
            b.add_node(id, pos);
        }

        for (from, to, data) in graph.edges() {
            b.add_directed_edge(from, to, data.length_m());
            if let Some(curve) = data.geometry() {
                b.set_geometry(from, to, curve.to_vec());
            }

            if directedness == Directedness::Undirected && !graph.contains_edge(to, from) {
                b.add_directed_edge(to, from, data.length_m());
                if let Some(curve) = data.geometry() {
                    b.set_geometry(to, from, curve.iter().rev().copied().collect());
                }
            }
        }

        let network = b.build()?;
        debug!(
            "road network loaded ({directedness:?}): {} nodes, {} edges",
            network.node_count(),
            network.edge_count()
        );
        Ok(network)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    #[inline]
    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.positions.get(&node).copied()
    }

    /// Outgoing `(neighbor, length_m)` pairs of `node`; empty for unknown
    /// nodes and dead ends alike.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length of the directed edge `from → to`.  When parallel edges exist
    /// the shortest one is reported, matching what routing would use.
    pub fn edge_length(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .filter(|&&(n, _)| n == to)
            .map(|&(_, len)| len)
            .min_by(f64::total_cmp)
    }

    /// Display polyline of `from → to`, if the edge carried one.
    pub fn edge_geometry(&self, from: NodeId, to: NodeId) -> Option<&[GeoPoint]> {
        self.geometry.get(&(from, to)).map(Vec::as_slice)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order; `build()`
/// checks that every edge endpoint was added as a node and bulk-loads the
/// R-tree.
///
/// For optimal A* results edge lengths must not be shorter than the
/// geodesic distance between their endpoints.  Lengths derived from
/// coordinates (as the discretizer produces them) always satisfy this.
///
/// # Example
///
/// ```
/// use sn_core::{GeoPoint, NodeId};
/// use sn_spatial::RoadNetworkBuilder;
///
/// let (a, c) = (NodeId(1), NodeId(2));
/// let mut b = RoadNetworkBuilder::new();
/// b.add_node(a, GeoPoint::new(21.0000, 105.8));
/// b.add_node(c, GeoPoint::new(21.0005, 105.8));
/// b.add_road(a, c, 55.6);
/// let net = b.build().unwrap();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    nodes:     Vec<(NodeId, GeoPoint)>,
    raw_edges: Vec<RawEdge>,
    geometry:  FxHashMap<(NodeId, NodeId), Vec<GeoPoint>>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    length_m: f64,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes:     Vec::new(),
            raw_edges: Vec::new(),
            geometry:  FxHashMap::default(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
            geometry:  FxHashMap::default(),
        }
    }

    /// Add a road node.  Adding the same id twice keeps the later position.
    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) {
        self.nodes.push((id, pos));
    }

    /// Add a **directed** edge from `from` to `to` of `length_m` metres.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: f64) {
        self.raw_edges.push(RawEdge { from, to, length_m });
    }

    /// Convenience: add edges in **both directions** for a two-way road.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f64) {
        self.add_directed_edge(a, b, length_m);
        self.add_directed_edge(b, a, length_m);
    }

    /// Attach a display polyline to the directed edge `from → to`.
    pub fn set_geometry(&mut self, from: NodeId, to: NodeId, points: Vec<GeoPoint>) {
        self.geometry.insert((from, to), points);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// # Errors
    ///
    /// [`SpatialError::DanglingEdge`] if an edge names a node that was never
    /// added, [`SpatialError::InvalidLength`] for negative or non-finite
    /// lengths.
    pub fn build(self) -> SpatialResult<RoadNetwork> {
        let mut positions: FxHashMap<NodeId, GeoPoint> = FxHashMap::default();
        positions.reserve(self.nodes.len());
        positions.extend(self.nodes);

        let mut adjacency: FxHashMap<NodeId, Vec<(NodeId, f64)>> = FxHashMap::default();
        let edge_count = self.raw_edges.len();
        for e in self.raw_edges {
            if !positions.contains_key(&e.from) || !positions.contains_key(&e.to) {
                return Err(SpatialError::DanglingEdge { from: e.from, to: e.to });
            }
            if !e.length_m.is_finite() || e.length_m < 0.0 {
                return Err(SpatialError::InvalidLength { from: e.from, to: e.to, length_m: e.length_m });
            }
            adjacency.entry(e.from).or_default().push((e.to, e.length_m));
        }

        // Geometry for edges that do not exist is dropped.
        let mut geometry = self.geometry;
        geometry.retain(|&(from, to), points| {
            points.len() >= 2 && adjacency.get(&from).is_some_and(|out| out.iter().any(|&(n, _)| n == to))
        });

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = positions
            .iter()
            .map(|(&id, &pos)| NodeEntry { point: [pos.lat, pos.lon], id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(RoadNetwork { positions, adjacency, geometry, edge_count, spatial_idx })
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
