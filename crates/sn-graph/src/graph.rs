//! Editable directed street graph.
//!
//! # Data layout
//!
//! Nodes and edges live in ordered maps keyed by `NodeId` and `(from, to)`.
//! Ordered maps keep every iteration — and therefore every discretization
//! run with the same id pool — deterministic, and make the outgoing edges of
//! a node a contiguous key range:
//!
//! ```text
//! edges[ (n, NodeId(0)) ..= (n, NodeId(u64::MAX)) ]
//! ```
//!
//! At most one edge exists per ordered node pair.  This is the mutable form
//! used by the discretizer; routing builds its own read-only adjacency from
//! it (see `sn-spatial`).

use std::collections::BTreeMap;

use log::debug;

use sn_core::{GeoPoint, NodeId};

use crate::{EdgeData, GraphError, GraphResult};

/// Directed street graph with per-node coordinates and per-edge attributes.
#[derive(Clone, Debug, Default)]
pub struct StreetGraph {
    nodes: BTreeMap<NodeId, GeoPoint>,
    edges: BTreeMap<(NodeId, NodeId), EdgeData>,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Insert a node.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if `id` is already present — the
    /// position of an existing node is never silently overwritten.
    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, pos);
        Ok(())
    }

    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[inline]
    pub fn node_pos(&self, id: NodeId) -> Option<GeoPoint> {
        self.nodes.get(&id).copied()
    }

    /// Position of `id`, or [`GraphError::UnknownNode`].
    pub fn require_pos(&self, id: NodeId) -> GraphResult<GeoPoint> {
        self.node_pos(id).ok_or(GraphError::UnknownNode(id))
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, GeoPoint)> + '_ {
        self.nodes.iter().map(|(&id, &pos)| (id, pos))
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Insert (or replace) the directed edge `from → to`.
    ///
    /// Returns the previous data if the edge already existed.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint is missing.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, data: EdgeData) -> GraphResult<Option<EdgeData>> {
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        Ok(self.edges.insert((from, to), data))
    }

    /// Remove the directed edge `from → to`, returning its data.
    ///
    /// Removing an edge that does not exist is a no-op returning `None`.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Option<EdgeData> {
        self.edges.remove(&(from, to))
    }

    #[inline]
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&EdgeData> {
        self.edges.get(&(from, to))
    }

    #[inline]
    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains_key(&(from, to))
    }

    /// All edges in ascending `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &EdgeData)> + '_ {
        self.edges.iter().map(|(&(from, to), data)| (from, to, data))
    }

    /// Snapshot of every edge key, detached from the graph so the caller may
    /// mutate the graph while walking it.
    pub fn edge_keys(&self) -> Vec<(NodeId, NodeId)> {
        self.edges.keys().copied().collect()
    }

    /// Outgoing edges of `node` as `(neighbor, data)`.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &EdgeData)> + '_ {
        self.edges
            .range((node, NodeId(0))..=(node, NodeId(u64::MAX)))
            .map(|(&(_, to), data)| (to, data))
    }

    /// Straight-line distance between two nodes in metres.
    pub fn endpoint_distance_m(&self, from: NodeId, to: NodeId) -> GraphResult<f64> {
        Ok(self.require_pos(from)?.distance_m(self.require_pos(to)?))
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Add the reverse of every bidirectional edge whose reverse is missing.
    ///
    /// Returns the number of edges added.
    pub fn mirror_missing_reverses(&mut self) -> usize {
        let missing: Vec<((NodeId, NodeId), EdgeData)> = self
            .edges
            .iter()
            .filter(|((from, to), data)| !data.is_oneway() && !self.edges.contains_key(&(*to, *from)))
            .map(|(&(from, to), data)| ((to, from), data.reversed()))
            .collect();

        for ((from, to), _) in &missing {
            debug!("adding missing reverse {from} → {to} of bidirectional edge");
        }
        let added = missing.len();
        self.edges.extend(missing);
        added
    }

    /// `true` if every bidirectional edge has a reverse of equal length.
    pub fn is_mirrored(&self) -> bool {
        self.edges.iter().all(|(&(from, to), data)| {
            data.is_oneway()
                || self
                    .edges
                    .get(&(to, from))
                    .is_some_and(|rev| rev.length_m() == data.length_m())
        })
    }
}
