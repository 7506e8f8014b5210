//! Route planning and traffic editing for one user.

use log::{debug, info};

use sn_core::{validate_speed, GeoPoint, NodeId, TravelMode};
use sn_spatial::{RoadNetwork, Route, Router};
use sn_traffic::{estimate_time, overlay_segments, Eta, OverlaySegment, TrafficCache, TrafficLevel};

use crate::{SessionError, SessionResult};

/// Everything needed to present one routing answer.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    pub route:   Route,
    pub eta:     Eta,
    /// One styled entry per traversed edge.
    pub overlay: Vec<OverlaySegment>,
}

/// A user's routing context over a shared network.
///
/// Construct with [`SessionBuilder`](crate::SessionBuilder).
pub struct Session<'n, R: Router> {
    pub(crate) network:        &'n RoadNetwork,
    pub(crate) router:         R,
    pub(crate) mode:           TravelMode,
    pub(crate) base_speed_mps: f64,
    pub(crate) traffic:        TrafficCache,
}

impl<'n, R: Router> Session<'n, R> {
    pub fn network(&self) -> &'n RoadNetwork {
        self.network
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn base_speed_mps(&self) -> f64 {
        self.base_speed_mps
    }

    /// Switch mode; the base speed resets to the mode's preset.
    pub fn set_mode(&mut self, mode: TravelMode) {
        self.mode = mode;
        self.base_speed_mps = mode.speed_mps();
    }

    pub fn set_base_speed(&mut self, mps: f64) -> SessionResult<()> {
        self.base_speed_mps = validate_speed(mps)?;
        Ok(())
    }

    pub fn traffic(&self) -> &TrafficCache {
        &self.traffic
    }

    pub fn traffic_mut(&mut self) -> &mut TrafficCache {
        &mut self.traffic
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Shortest route between two nodes, with its traffic-aware ETA and
    /// overlay.
    pub fn plan(&self, from: NodeId, to: NodeId) -> SessionResult<RoutePlan> {
        let route = self.router.route(self.network, from, to)?;
        let eta = estimate_time(self.network, &self.traffic, &route.nodes, self.base_speed_mps)?;
        let overlay = overlay_segments(self.network, &self.traffic, &route.nodes)?;

        debug!(
            "planned {from} → {to}: {} nodes, {:.1} m, {eta} ({})",
            route.nodes.len(),
            route.distance_m,
            self.mode
        );
        Ok(RoutePlan { route, eta, overlay })
    }

    /// Snap both points to their nearest nodes, then [`plan`](Self::plan).
    pub fn plan_between(&self, from: GeoPoint, to: GeoPoint) -> SessionResult<RoutePlan> {
        let (a, b) = self.snap_pair(from, to)?;
        self.plan(a, b)
    }

    // ── Traffic edits ─────────────────────────────────────────────────────

    /// Route from `from` to `to` and set `level` on every segment of that
    /// route.  Returns the number of segments written.
    pub fn edit_traffic(&mut self, from: NodeId, to: NodeId, level: TrafficLevel) -> SessionResult<usize> {
        let route = self.router.route(self.network, from, to)?;
        let written = self.traffic.set_route_level(&route.nodes, level);
        info!("traffic level {level} set on {written} segments between {from} and {to}");
        Ok(written)
    }

    pub fn edit_traffic_between(&mut self, from: GeoPoint, to: GeoPoint, level: TrafficLevel) -> SessionResult<usize> {
        let (a, b) = self.snap_pair(from, to)?;
        self.edit_traffic(a, b, level)
    }

    fn snap_pair(&self, from: GeoPoint, to: GeoPoint) -> SessionResult<(NodeId, NodeId)> {
        let a = self.network.snap_to_node(from).ok_or(SessionError::EmptyNetwork)?;
        let b = self.network.snap_to_node(to).ok_or(SessionError::EmptyNetwork)?;
        Ok((a, b))
    }
}
