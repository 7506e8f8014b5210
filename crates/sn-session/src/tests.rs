//! Unit tests for sn-session.

#[cfg(test)]
mod helpers {
    use sn_core::{GeoPoint, NodeId};
    use sn_spatial::{RoadNetwork, RoadNetworkBuilder};

    pub const TOL: f64 = 1e-9;

    /// A T-junction, two-way everywhere:
    ///
    /// ```text
    ///            4
    ///            |
    ///   1 ------ 2 ------ 3
    /// ```
    pub fn junction() -> RoadNetwork {
        let nodes = [
            (NodeId(1), GeoPoint::new(21.000, 105.800)),
            (NodeId(2), GeoPoint::new(21.000, 105.801)),
            (NodeId(3), GeoPoint::new(21.000, 105.802)),
            (NodeId(4), GeoPoint::new(21.001, 105.801)),
        ];
        let mut b = RoadNetworkBuilder::new();
        for &(id, pos) in &nodes {
            b.add_node(id, pos);
        }
        for (i, j) in [(0, 1), (1, 2), (1, 3)] {
            let length = nodes[i].1.distance_m(nodes[j].1);
            b.add_road(nodes[i].0, nodes[j].0, length);
        }
        b.build().unwrap()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use sn_core::{CoreError, TravelMode};
    use sn_spatial::AStarRouter;
    use sn_traffic::{TrafficCache, TrafficLevel};
    use crate::{SessionBuilder, SessionError};
    use super::helpers::junction;

    #[test]
    fn defaults() {
        let net = junction();
        let session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        assert_eq!(session.mode(), TravelMode::Walk);
        assert_eq!(session.base_speed_mps(), 1.2);
        assert!(session.traffic().is_empty());
        assert_eq!(session.network().node_count(), 4);
    }

    #[test]
    fn mode_and_speed_override() {
        let net = junction();
        let session = SessionBuilder::new(&net, AStarRouter).mode(TravelMode::Moped).build().unwrap();
        assert_eq!(session.base_speed_mps(), 6.9);

        let session = SessionBuilder::new(&net, AStarRouter)
            .mode(TravelMode::Car)
            .base_speed(5.0)
            .build()
            .unwrap();
        assert_eq!(session.mode(), TravelMode::Car);
        assert_eq!(session.base_speed_mps(), 5.0);
    }

    #[test]
    fn invalid_speed_rejected() {
        let net = junction();
        for mps in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                SessionBuilder::new(&net, AStarRouter).base_speed(mps).build(),
                Err(SessionError::Core(CoreError::InvalidSpeed(_)))
            ));
        }
    }

    #[test]
    fn initial_traffic() {
        let net = junction();
        let mut cache = TrafficCache::new();
        cache.set_level(sn_core::NodeId(1), sn_core::NodeId(2), TrafficLevel::MAX);
        let session = SessionBuilder::new(&net, AStarRouter).traffic(cache).build().unwrap();
        assert_eq!(session.traffic().len(), 1);
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use sn_core::{GeoPoint, NodeId, TravelMode};
    use sn_spatial::{AStarRouter, DijkstraRouter, RoadNetwork, SpatialError};
    use sn_traffic::{Rgb, TrafficLevel};
    use crate::{SessionBuilder, SessionError};
    use super::helpers::{junction, TOL};

    #[test]
    fn plan_free_flow() {
        let net = junction();
        let session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        let plan = session.plan(NodeId(1), NodeId(3)).unwrap();

        assert_eq!(plan.route.nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert!((plan.eta.total_secs - plan.route.distance_m / 1.2).abs() < TOL);
        assert_eq!(plan.eta.peak_level, TrafficLevel::CLEAR);
        assert_eq!(plan.overlay.len(), 2);
        assert!(plan.overlay.iter().all(|s| s.color == Rgb::GREEN && s.weight == 3));
    }

    #[test]
    fn plan_trivial() {
        let net = junction();
        let session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        let plan = session.plan(NodeId(2), NodeId(2)).unwrap();
        assert!(plan.route.is_trivial());
        assert_eq!(plan.eta.total_secs, 0.0);
        assert!(plan.overlay.is_empty());
    }

    #[test]
    fn plan_between_snaps() {
        let net = junction();
        let session = SessionBuilder::new(&net, DijkstraRouter).build().unwrap();
        let plan = session
            .plan_between(GeoPoint::new(21.0000, 105.8001), GeoPoint::new(21.0009, 105.8011))
            .unwrap();
        assert_eq!(plan.route.nodes, vec![NodeId(1), NodeId(2), NodeId(4)]);
    }

    #[test]
    fn plan_between_on_empty_network() {
        let net = RoadNetwork::empty();
        let session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        assert!(matches!(
            session.plan_between(GeoPoint::new(21.0, 105.8), GeoPoint::new(21.0, 105.801)),
            Err(SessionError::EmptyNetwork)
        ));
    }

    #[test]
    fn unknown_node_propagates() {
        let net = junction();
        let session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        assert!(matches!(
            session.plan(NodeId(1), NodeId(99)),
            Err(SessionError::Spatial(SpatialError::InvalidEndpoint(NodeId(99))))
        ));
    }

    #[test]
    fn faster_mode_shorter_eta() {
        let net = junction();
        let mut session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        let walk = session.plan(NodeId(1), NodeId(4)).unwrap().eta.total_secs;
        session.set_mode(TravelMode::Car);
        assert_eq!(session.base_speed_mps(), 8.3);
        let car = session.plan(NodeId(1), NodeId(4)).unwrap().eta.total_secs;
        assert!(car < walk);

        session.set_base_speed(2.4).unwrap();
        let explicit = session.plan(NodeId(1), NodeId(4)).unwrap().eta.total_secs;
        assert!((explicit - walk / 2.0).abs() < 1e-6);
        assert!(session.set_base_speed(0.0).is_err());
    }
}

// ── Traffic edits ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use sn_core::{GeoPoint, NodeId};
    use sn_spatial::AStarRouter;
    use sn_traffic::{Rgb, TrafficLevel};
    use crate::SessionBuilder;
    use super::helpers::junction;

    #[test]
    fn edit_then_eta() {
        let net = junction();
        let mut session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        let before = session.plan(NodeId(1), NodeId(3)).unwrap();

        let written = session.edit_traffic(NodeId(3), NodeId(1), TrafficLevel::MAX).unwrap();
        assert_eq!(written, 2);

        let after = session.plan(NodeId(1), NodeId(3)).unwrap();
        assert_eq!(after.route.nodes, before.route.nodes); // path selection ignores traffic
        assert!((after.eta.total_secs - 2.0 * before.eta.total_secs).abs() < 1e-6);
        assert_eq!(after.eta.peak_level, TrafficLevel::MAX);
        assert!(after.overlay.iter().all(|s| s.color == Rgb::RED && s.weight == 6));

        // The branch towards 4 is untouched.
        assert_eq!(session.traffic().level(NodeId(2), NodeId(4)), TrafficLevel::CLEAR);
    }

    #[test]
    fn edit_between_points() {
        let net = junction();
        let mut session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        let level = TrafficLevel::new(5).unwrap();
        let written = session
            .edit_traffic_between(GeoPoint::new(21.0, 105.801), GeoPoint::new(21.001, 105.801), level)
            .unwrap();
        assert_eq!(written, 1);
        assert_eq!(session.traffic().level(NodeId(4), NodeId(2)), level);
    }

    #[test]
    fn direct_cache_access() {
        let net = junction();
        let mut session = SessionBuilder::new(&net, AStarRouter).build().unwrap();
        session.traffic_mut().set_level(NodeId(2), NodeId(3), TrafficLevel::new(4).unwrap());
        let plan = session.plan(NodeId(1), NodeId(3)).unwrap();
        assert_eq!(plan.eta.peak_level.get(), 4);
        assert_eq!(plan.overlay[0].level, TrafficLevel::CLEAR);
        assert_eq!(plan.overlay[1].weight, 4);
    }
}

// ── Batches ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use sn_core::NodeId;
    use sn_spatial::{AStarRouter, Router, SpatialError};
    use crate::route_batch;
    use super::helpers::junction;

    #[test]
    fn keeps_request_order() {
        let net = junction();
        let requests = [
            (NodeId(1), NodeId(3)),
            (NodeId(4), NodeId(1)),
            (NodeId(1), NodeId(42)),
            (NodeId(3), NodeId(3)),
        ];
        let results = route_batch(&net, &AStarRouter, &requests);
        assert_eq!(results.len(), 4);

        for (result, &(from, to)) in results.iter().zip(&requests) {
            match result {
                Ok(route) => {
                    assert_eq!(route.origin(), Some(from));
                    assert_eq!(route.destination(), Some(to));
                    assert_eq!(route, &AStarRouter.route(&net, from, to).unwrap());
                }
                Err(e) => assert!(matches!(e, SpatialError::InvalidEndpoint(NodeId(42)))),
            }
        }
        assert!(results[2].is_err());
    }
}
