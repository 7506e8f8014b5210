//! The two discretization passes and manual bridging edges.
//!
//! # Passes
//!
//! | Pass | Matches                                   | Replacement                                  |
//! |------|-------------------------------------------|----------------------------------------------|
//! | 1    | edges carrying curve geometry             | straight chain through every curve point     |
//! | 2    | straight edges longer than `2 * S`        | `ceil(len / S)` equal pieces, each `<= S`    |
//!
//! Each pass walks a snapshot of the edge keys taken when the pass starts, so
//! edges it creates are never revisited within the same pass.  A bidirectional
//! road is decomposed once: its reverse is removed together with the forward
//! edge and the chain is mirrored link by link.  When the snapshot later
//! reaches that already-removed reverse it is skipped.
//!
//! Pass 2 runs over the output of pass 1, so a curve link that is itself
//! longer than `2 * S` is subdivided further.  Both passes draw from the one
//! [`IdAllocator`] owned by the discretizer.

use std::fmt;

use log::{debug, info, warn};

use sn_core::{GeoPoint, NodeId};
use sn_graph::{EdgeData, StreetGraph};

use crate::{DiscretizeConfig, DiscretizeResult, IdAllocator};

/// Slack applied to `len / S` before rounding up, so an edge that is a
/// multiple of `S` up to distance rounding noise is not split into an extra
/// piece.  Pieces may exceed `S` by at most `S * PIECE_EPSILON`.
const PIECE_EPSILON: f64 = 1e-3;

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`Discretizer::add_manual_edge`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ManualEdge {
    /// Inserted in both directions with the given length.
    Added { distance_m: f64 },
    /// Endpoints too far apart; nothing was inserted.
    Rejected { distance_m: f64 },
}

/// Counters accumulated over a discretization run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscretizeReport {
    /// Roads (a bidirectional pair counts once) replaced in pass 1.
    pub curves_flattened: usize,
    /// Roads replaced in pass 2.
    pub edges_subdivided: usize,
    /// Nodes created by both passes.
    pub synthetic_nodes: usize,
    pub manual_added: usize,
    pub manual_rejected: usize,
    /// Pool ids left unused after the run.
    pub ids_remaining: usize,
}

impl fmt::Display for DiscretizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} curves flattened, {} long edges subdivided, {} synthetic nodes, \
             {} manual edges added ({} rejected), {} pool ids left",
            self.curves_flattened,
            self.edges_subdivided,
            self.synthetic_nodes,
            self.manual_added,
            self.manual_rejected,
            self.ids_remaining,
        )
    }
}

// ── Discretizer ───────────────────────────────────────────────────────────────

/// Owns the configuration, the id allocator, and the run's counters.
///
/// # Example
///
/// ```rust,ignore
/// let mut d = Discretizer::new(DiscretizeConfig::default(), IdAllocator::new(pool))?;
/// d.add_manual_edge(&mut raw, NodeId(10_130_399_575), NodeId(104_782_499))?;
/// let (refined, report) = d.run(raw)?;
/// ```
pub struct Discretizer {
    config: DiscretizeConfig,
    ids:    IdAllocator,
    report: DiscretizeReport,
}

impl Discretizer {
    /// # Errors
    ///
    /// [`DiscretizeError::Config`](crate::DiscretizeError::Config) if the
    /// configuration fails validation.
    pub fn new(config: DiscretizeConfig, ids: IdAllocator) -> DiscretizeResult<Self> {
        config.validate()?;
        let report = DiscretizeReport { ids_remaining: ids.remaining(), ..Default::default() };
        Ok(Self { config, ids, report })
    }

    pub fn report(&self) -> &DiscretizeReport {
        &self.report
    }

    /// Run pass 1 then pass 2 and return the refined graph.
    pub fn run(mut self, mut graph: StreetGraph) -> DiscretizeResult<(StreetGraph, DiscretizeReport)> {
        self.flatten_curves(&mut graph)?;
        self.subdivide_long_edges(&mut graph)?;
        info!("discretization finished: {}", self.report);
        Ok((graph, self.report))
    }

    // ── Manual edges ──────────────────────────────────────────────────────

    /// Bridge two existing nodes with a bidirectional straight edge.
    ///
    /// Edges whose endpoints are more than `max_manual_edge_m` apart usually
    /// connect nodes from mismatched regions; they are logged and skipped,
    /// not subdivided.
    ///
    /// # Errors
    ///
    /// Unknown endpoints are a caller error.
    pub fn add_manual_edge(&mut self, graph: &mut StreetGraph, a: NodeId, b: NodeId) -> DiscretizeResult<ManualEdge> {
        let distance_m = graph.endpoint_distance_m(a, b)?;
        if distance_m > self.config.max_manual_edge_m {
            warn!(
                "skipping manual edge {a} – {b}: {distance_m:.1} m exceeds the {:.1} m limit",
                self.config.max_manual_edge_m
            );
            self.report.manual_rejected += 1;
            return Ok(ManualEdge::Rejected { distance_m });
        }

        link(graph, a, b, distance_m, false)?;
        self.report.manual_added += 1;
        Ok(ManualEdge::Added { distance_m })
    }

    // ── Pass 1 ────────────────────────────────────────────────────────────

    /// Replace every curved edge by a straight chain through its curve
    /// points.  Returns the number of roads flattened.
    pub fn flatten_curves(&mut self, graph: &mut StreetGraph) -> DiscretizeResult<usize> {
        let mut flattened = 0;

        for (from, to) in graph.edge_keys() {
            // Gone already: the reverse half of a road handled earlier.
            let Some(data) = graph.edge(from, to) else { continue };
            let interior = data.interior_points().len();
            let Some(curve) = data.geometry().map(<[GeoPoint]>::to_vec) else { continue };
            let oneway = data.is_oneway();

            graph.remove_edge(from, to);
            if !oneway {
                graph.remove_edge(to, from);
            }

            debug!("flattening {from} → {to} through {interior} curve points");
            self.chain(graph, from, to, &curve, oneway)?;
            flattened += 1;
        }

        self.report.curves_flattened += flattened;
        Ok(flattened)
    }

    // ── Pass 2 ────────────────────────────────────────────────────────────

    /// Split every edge whose endpoints are more than `2 * S` apart into
    /// equal straight pieces no longer than `S`.  Returns the number of roads
    /// subdivided.
    pub fn subdivide_long_edges(&mut self, graph: &mut StreetGraph) -> DiscretizeResult<usize> {
        let seg = self.config.min_segment_m;
        let mut subdivided = 0;

        for (from, to) in graph.edge_keys() {
            let Some(data) = graph.edge(from, to) else { continue };
            let oneway = data.is_oneway();

            let pa = graph.require_pos(from)?;
            let pb = graph.require_pos(to)?;
            let length = pa.distance_m(pb);
            if length <= 2.0 * seg {
                continue;
            }
            let pieces = ((length / seg) - PIECE_EPSILON).ceil() as usize;
            self.ids.ensure_available(pieces - 1)?;

            graph.remove_edge(from, to);
            if !oneway {
                // May not exist; tolerated.
                graph.remove_edge(to, from);
            }

            let points: Vec<GeoPoint> = (0..=pieces)
                .map(|i| match i {
                    0 => pa,
                    i if i == pieces => pb,
                    i => pa.interpolate(pb, i as f64 / pieces as f64),
                })
                .collect();

            debug!("subdividing {from} → {to} ({length:.1} m) into {pieces} pieces");
            self.chain(graph, from, to, &points, oneway)?;
            subdivided += 1;
        }

        self.report.edges_subdivided += subdivided;
        Ok(subdivided)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Link `from → … → to` through `points` (which include both endpoint
    /// positions), creating a synthetic node for every interior point.
    fn chain(
        &mut self,
        graph:  &mut StreetGraph,
        from:   NodeId,
        to:     NodeId,
        points: &[GeoPoint],
        oneway: bool,
    ) -> DiscretizeResult<()> {
        let last = points.len() - 1;
        let mut prev_id = from;
        let mut prev_pos = points[0];

        for (i, &pos) in points.iter().enumerate().skip(1) {
            let id = if i == last {
                to
            } else {
                let id = self.ids.next_id()?;
                graph.add_node(id, pos)?;
                self.report.synthetic_nodes += 1;
                id
            };

            link(graph, prev_id, id, prev_pos.distance_m(pos), oneway)?;
            prev_id = id;
            prev_pos = pos;
        }

        self.report.ids_remaining = self.ids.remaining();
        Ok(())
    }
}

/// Insert `a → b` and, for bidirectional roads, `b → a` of equal length.
fn link(graph: &mut StreetGraph, a: NodeId, b: NodeId, length_m: f64, oneway: bool) -> DiscretizeResult<()> {
    let data = EdgeData::straight(length_m, oneway)?;
    if !oneway {
        graph.add_edge(b, a, data.clone())?;
    }
    graph.add_edge(a, b, data)?;
    Ok(())
}
