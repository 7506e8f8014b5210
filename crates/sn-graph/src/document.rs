//! JSON exchange format shared by the raw and refined graphs.
//!
//! # Schema
//!
//! ```json
//! {
//!   "nodes": [{ "id": 100, "lat": 21.0, "lon": 105.8 }],
//!   "edges": [{ "from": 100, "to": 200, "oneway": false,
//!               "length_m": 48.0,
//!               "geometry": [[21.0, 105.8], [21.0002, 105.8001]] }]
//! }
//! ```
//!
//! | Field      | Required | Meaning                                              |
//! |------------|----------|------------------------------------------------------|
//! | `oneway`   | no       | Defaults to `false` (bidirectional)                  |
//! | `length_m` | no       | Derived from `geometry`, else from the endpoints     |
//! | `geometry` | no       | Ordered `[lat, lon]` curve including both endpoints  |
//!
//! Loading mirrors any bidirectional edge whose reverse is absent, so the
//! in-memory graph always satisfies the mirroring invariant.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use sn_core::{polyline_length_m, GeoPoint, NodeId};

use crate::{EdgeData, GraphResult, StreetGraph};

// ── Records ───────────────────────────────────────────────────────────────────

/// Serialized form of a [`StreetGraph`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id:  NodeId,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to:   NodeId,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<[f64; 2]>>,
}

// ── Conversion ────────────────────────────────────────────────────────────────

impl StreetGraph {
    /// Build a graph from a parsed document.
    ///
    /// # Errors
    ///
    /// Duplicate node ids, edges referencing unknown nodes, and invalid edge
    /// data are rejected.
    pub fn from_document(doc: &GraphDocument) -> GraphResult<Self> {
        let mut graph = StreetGraph::new();
        for n in &doc.nodes {
            graph.add_node(n.id, GeoPoint::new(n.lat, n.lon))?;
        }

        for e in &doc.edges {
            let geometry: Option<Vec<GeoPoint>> = e
                .geometry
                .as_ref()
                .map(|g| g.iter().map(|&[lat, lon]| GeoPoint::new(lat, lon)).collect());

            let length_m = match (e.length_m, &geometry) {
                (Some(len), _) => len,
                (None, Some(points)) => polyline_length_m(points),
                (None, None) => graph.endpoint_distance_m(e.from, e.to)?,
            };

            graph.add_edge(e.from, e.to, EdgeData::new(length_m, e.oneway, geometry)?)?;
        }

        graph.mirror_missing_reverses();
        Ok(graph)
    }

    /// Serialize into the exchange schema, lengths always included.
    pub fn to_document(&self) -> GraphDocument {
        let nodes = self
            .nodes()
            .map(|(id, pos)| NodeRecord { id, lat: pos.lat, lon: pos.lon })
            .collect();

        let edges = self
            .edges()
            .map(|(from, to, data)| EdgeRecord {
                from,
                to,
                oneway:   data.is_oneway(),
                length_m: Some(data.length_m()),
                geometry: data
                    .geometry()
                    .map(|g| g.iter().map(|p| [p.lat, p.lon]).collect()),
            })
            .collect();

        GraphDocument { nodes, edges }
    }
}

// ── File I/O ──────────────────────────────────────────────────────────────────

/// Load a graph from a JSON file.
pub fn read_graph(path: &Path) -> GraphResult<StreetGraph> {
    read_graph_from(BufReader::new(File::open(path)?))
}

/// Load a graph from any JSON reader.
pub fn read_graph_from<R: Read>(reader: R) -> GraphResult<StreetGraph> {
    let doc: GraphDocument = serde_json::from_reader(reader)?;
    StreetGraph::from_document(&doc)
}

/// Write a graph to a JSON file, replacing any existing file.
pub fn write_graph(path: &Path, graph: &StreetGraph) -> GraphResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_graph_to(&mut writer, graph)?;
    writer.flush()?;
    Ok(())
}

/// Write a graph as JSON to any writer.
pub fn write_graph_to<W: Write>(writer: W, graph: &StreetGraph) -> GraphResult<()> {
    serde_json::to_writer(writer, &graph.to_document())?;
    Ok(())
}
