//! Unit tests for sn-traffic.

#[cfg(test)]
mod helpers {
    use sn_core::{GeoPoint, NodeId};
    use sn_spatial::{RoadNetwork, RoadNetworkBuilder};

    pub const A: NodeId = NodeId(1);
    pub const B: NodeId = NodeId(2);
    pub const C: NodeId = NodeId(3);

    /// A – B (120 m) – C (60 m), both two-way, laid out west to east.
    pub fn line_network() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        b.add_node(A, GeoPoint::new(21.0, 105.800));
        b.add_node(B, GeoPoint::new(21.0, 105.801));
        b.add_node(C, GeoPoint::new(21.0, 105.8016));
        b.add_road(A, B, 120.0);
        b.add_road(B, C, 60.0);
        b.build().unwrap()
    }
}

// ── Levels ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod level {
    use crate::{speed_factor, TrafficError, TrafficLevel};

    fn lvl(l: i64) -> TrafficLevel {
        TrafficLevel::new(l).unwrap()
    }

    #[test]
    fn accepts_one_through_seven() {
        for l in 1..=7 {
            assert_eq!(i64::from(lvl(l)), l);
        }
        assert_eq!(TrafficLevel::default(), TrafficLevel::CLEAR);
        assert_eq!(TrafficLevel::CLEAR.get(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        for l in [0, 8, -1, 100] {
            assert!(matches!(TrafficLevel::new(l), Err(TrafficError::InvalidLevel(v)) if v == l));
        }
    }

    #[test]
    fn speed_factors() {
        let expected = [1.0, 1.2, 1.2, 1.5, 1.5, 1.8, 2.0];
        for (l, want) in (1..=7).zip(expected) {
            assert_eq!(speed_factor(lvl(l)), want, "level {l}");
            assert_eq!(lvl(l).speed_factor(), want);
        }
    }

    #[test]
    fn line_weights() {
        let expected = [3, 3, 3, 4, 4, 5, 6];
        for (l, want) in (1..=7).zip(expected) {
            assert_eq!(lvl(l).line_weight(), want, "level {l}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(lvl(2).label(), "clear");
        assert_eq!(lvl(3).label(), "normal");
        assert_eq!(lvl(6).label(), "congested");
        assert_eq!(lvl(7).label(), "blocked");
        assert_eq!(lvl(5).to_string(), "5 (congested)");
    }
}

// ── Colours ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod color {
    use crate::{color_for, legend, Rgb, TrafficLevel};

    #[test]
    fn anchors_exact() {
        assert_eq!(color_for(1.0), Rgb::GREEN);
        assert_eq!(color_for(3.0), Rgb::YELLOW);
        assert_eq!(color_for(5.0), Rgb::ORANGE);
        assert_eq!(color_for(7.0), Rgb::RED);
    }

    #[test]
    fn midpoints_truncate() {
        assert_eq!(color_for(2.0), Rgb::new(127, 255, 0));
        assert_eq!(color_for(4.0), Rgb::new(255, 210, 0));
        assert_eq!(color_for(6.0), Rgb::new(255, 82, 0));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(color_for(0.0), Rgb::GREEN);
        assert_eq!(color_for(-3.5), Rgb::GREEN);
        assert_eq!(color_for(9.0), Rgb::RED);
        assert_eq!(color_for(f64::NAN), Rgb::GREEN);
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(Rgb::GREEN.to_hex(), "#00ff00");
        assert_eq!(Rgb::ORANGE.to_hex(), "#ffa500");
        assert_eq!(color_for(6.0).to_string(), "#ff5200");
    }

    #[test]
    fn legend_lists_anchors() {
        let l = legend();
        assert_eq!(l[0], (TrafficLevel::CLEAR, Rgb::GREEN));
        assert_eq!(l[3], (TrafficLevel::MAX, Rgb::RED));
        assert_eq!(l.map(|(lvl, _)| lvl.get()), [1, 3, 5, 7]);
    }
}

// ── Cache ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use std::thread;

    use sn_core::{NodeId, NodePair};
    use crate::{SharedTrafficCache, TrafficCache, TrafficLevel, TrafficLevels};
    use super::helpers::{A, B, C};

    fn lvl(l: i64) -> TrafficLevel {
        TrafficLevel::new(l).unwrap()
    }

    #[test]
    fn direction_independent() {
        let mut cache = TrafficCache::new();
        cache.set_level(B, A, lvl(5));
        assert_eq!(cache.level(A, B), lvl(5));
        assert_eq!(cache.level(B, A), lvl(5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn absent_is_clear() {
        let cache = TrafficCache::new();
        assert_eq!(cache.level(A, C), TrafficLevel::CLEAR);
        assert!(cache.get(A, C).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn overwrite_and_remove() {
        let mut cache = TrafficCache::new();
        assert_eq!(cache.set_level(A, B, lvl(3)), None);
        assert_eq!(cache.set_level(B, A, lvl(6)), Some(lvl(3)));
        assert_eq!(cache.level(A, B), lvl(6));
        assert_eq!(cache.remove(A, B), Some(lvl(6)));
        assert_eq!(cache.level(A, B), TrafficLevel::CLEAR);
    }

    #[test]
    fn route_level_writes_each_segment() {
        let mut cache = TrafficCache::new();
        assert_eq!(cache.set_route_level(&[A, B, C], lvl(4)), 2);
        assert_eq!(cache.level(A, B), lvl(4));
        assert_eq!(cache.level(C, B), lvl(4));
        assert_eq!(cache.level(A, C), TrafficLevel::CLEAR);

        assert_eq!(cache.set_route_level(&[A], lvl(7)), 0);
        assert_eq!(cache.set_route_level(&[], lvl(7)), 0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn iter_and_clear() {
        let mut cache: TrafficCache = [(B, A, lvl(2)), (C, B, lvl(7))].into_iter().collect();
        let mut entries: Vec<_> = cache.iter().collect();
        entries.sort();
        assert_eq!(entries, vec![(NodePair::new(A, B), lvl(2)), (NodePair::new(B, C), lvl(7))]);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_clones_see_writes() {
        let shared = SharedTrafficCache::default();
        let other = shared.clone();
        other.set_level(A, B, lvl(6));
        assert_eq!(shared.level(B, A), lvl(6));
        assert_eq!(shared.snapshot().level(A, B), lvl(6));
    }

    #[test]
    fn concurrent_writers() {
        let shared = SharedTrafficCache::new(TrafficCache::new());
        thread::scope(|s| {
            for t in 0..4u64 {
                let handle = shared.clone();
                s.spawn(move || {
                    for i in 0..100u64 {
                        handle.set_level(NodeId(t * 1_000 + i), NodeId(t * 1_000 + i + 1), lvl(3));
                    }
                });
            }
        });
        assert_eq!(shared.len(), 400);
    }

    #[test]
    fn trait_objects() {
        let mut cache = TrafficCache::new();
        cache.set_level(A, B, lvl(7));
        let shared = SharedTrafficCache::from(cache.clone());
        let sources: [&dyn TrafficLevels; 2] = [&cache, &shared];
        for src in sources {
            assert_eq!(src.level(B, A), lvl(7));
            assert_eq!(src.level(B, C), TrafficLevel::CLEAR);
        }
    }
}

// ── ETA ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod eta {
    use sn_core::NodeId;
    use sn_spatial::SpatialError;
    use crate::{estimate_time, Eta, TrafficCache, TrafficError, TrafficLevel};
    use super::helpers::{line_network, A, B, C};

    const WALK: f64 = 1.2;

    fn lvl(l: i64) -> TrafficLevel {
        TrafficLevel::new(l).unwrap()
    }

    #[test]
    fn free_flow() {
        let net = line_network();
        let eta = estimate_time(&net, &TrafficCache::new(), &[A, B, C], WALK).unwrap();
        assert!((eta.total_secs - 150.0).abs() < 1e-9);
        assert_eq!(eta.peak_level, TrafficLevel::CLEAR);
    }

    #[test]
    fn congestion_scales_segment() {
        let net = line_network();
        let mut traffic = TrafficCache::new();
        traffic.set_level(B, A, lvl(7));
        let eta = estimate_time(&net, &traffic, &[A, B, C], WALK).unwrap();
        // 120 m at 1.2 m/s doubled, plus 60 m free-flowing.
        assert!((eta.total_secs - 250.0).abs() < 1e-9);
        assert_eq!(eta.peak_level, lvl(7));
    }

    #[test]
    fn monotone_in_level() {
        let net = line_network();
        let mut previous = 0.0;
        for l in 1..=7 {
            let mut traffic = TrafficCache::new();
            traffic.set_level(A, B, lvl(l));
            let eta = estimate_time(&net, &traffic, &[A, B], WALK).unwrap();
            assert!(eta.total_secs >= previous, "level {l}");
            previous = eta.total_secs;
        }
    }

    #[test]
    fn trivial_routes_take_no_time() {
        let net = line_network();
        for nodes in [&[][..], &[A][..]] {
            let eta = estimate_time(&net, &TrafficCache::new(), nodes, WALK).unwrap();
            assert_eq!(eta.total_secs, 0.0);
            assert_eq!(eta.peak_level, TrafficLevel::CLEAR);
        }
    }

    #[test]
    fn invalid_speed() {
        let net = line_network();
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                estimate_time(&net, &TrafficCache::new(), &[A, B], speed),
                Err(TrafficError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn missing_edge() {
        let net = line_network();
        let result = estimate_time(&net, &TrafficCache::new(), &[A, C], WALK);
        assert!(matches!(
            result,
            Err(TrafficError::Spatial(SpatialError::MissingEdge { from: NodeId(1), to: NodeId(3) }))
        ));
    }

    #[test]
    fn display() {
        let eta = |secs| Eta { total_secs: secs, peak_level: TrafficLevel::CLEAR };
        assert_eq!(eta(30.0).to_string(), "< 1 min");
        assert_eq!(eta(59.9).to_string(), "< 1 min");
        assert_eq!(eta(720.0).to_string(), "12 min");
        assert_eq!(eta(3_599.0).to_string(), "59 min");
        assert_eq!(eta(3_900.0).to_string(), "1 h 05 min");
        assert_eq!(eta(125.7).minutes_seconds(), (2, 5));
    }
}

// ── Overlay ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod overlay {
    use sn_core::{GeoPoint, NodeId};
    use sn_spatial::RoadNetworkBuilder;
    use crate::{overlay_segments, Rgb, TrafficCache, TrafficError, TrafficLevel};
    use super::helpers::{line_network, A, B, C};

    #[test]
    fn styles_each_segment() {
        let net = line_network();
        let mut traffic = TrafficCache::new();
        traffic.set_level(C, B, TrafficLevel::MAX);

        let segs = overlay_segments(&net, &traffic, &[A, B, C]).unwrap();
        assert_eq!(segs.len(), 2);

        assert_eq!((segs[0].from, segs[0].to), (A, B));
        assert_eq!(segs[0].color, Rgb::GREEN);
        assert_eq!(segs[0].weight, 3);
        assert_eq!(segs[0].coords, vec![GeoPoint::new(21.0, 105.800), GeoPoint::new(21.0, 105.801)]);

        assert_eq!(segs[1].level, TrafficLevel::MAX);
        assert_eq!(segs[1].color, Rgb::RED);
        assert_eq!(segs[1].weight, 6);
    }

    #[test]
    fn uses_edge_geometry() {
        let (p1, mid, p2) = (
            GeoPoint::new(21.0, 105.8),
            GeoPoint::new(21.0002, 105.8005),
            GeoPoint::new(21.0, 105.801),
        );
        let mut b = RoadNetworkBuilder::new();
        b.add_node(NodeId(1), p1);
        b.add_node(NodeId(2), p2);
        b.add_directed_edge(NodeId(1), NodeId(2), 110.0);
        b.set_geometry(NodeId(1), NodeId(2), vec![p1, mid, p2]);
        let net = b.build().unwrap();

        let segs = overlay_segments(&net, &TrafficCache::new(), &[NodeId(1), NodeId(2)]).unwrap();
        assert_eq!(segs[0].coords, vec![p1, mid, p2]);
    }

    #[test]
    fn missing_edge() {
        let net = line_network();
        assert!(matches!(
            overlay_segments(&net, &TrafficCache::new(), &[A, C]),
            Err(TrafficError::Spatial(_))
        ));
        assert!(overlay_segments(&net, &TrafficCache::new(), &[A]).unwrap().is_empty());
    }
}

// ── CSV edits ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edits {
    use crate::{load_traffic_csv, write_traffic_csv, TrafficError, TrafficLevel};
    use super::helpers::{A, B, C};

    #[test]
    fn load_rows() {
        let csv = "node_a,node_b,level\n1,2,5\n3, 2, 7\n2,1,6\n";
        let cache = load_traffic_csv(csv.as_bytes()).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.level(A, B), TrafficLevel::new(6).unwrap()); // later row wins
        assert_eq!(cache.level(B, C), TrafficLevel::MAX);
    }

    #[test]
    fn invalid_level_rejected() {
        let csv = "node_a,node_b,level\n1,2,9\n";
        assert!(matches!(load_traffic_csv(csv.as_bytes()), Err(TrafficError::InvalidLevel(9))));
    }

    #[test]
    fn malformed_row_rejected() {
        let csv = "node_a,node_b,level\n1,two,3\n";
        assert!(matches!(load_traffic_csv(csv.as_bytes()), Err(TrafficError::Csv(_))));
    }

    #[test]
    fn write_then_load() {
        let csv = "node_a,node_b,level\n3,2,4\n1,2,2\n";
        let cache = load_traffic_csv(csv.as_bytes()).unwrap();

        let mut out = Vec::new();
        write_traffic_csv(&mut out, &cache).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "node_a,node_b,level\n1,2,2\n2,3,4\n");

        assert_eq!(load_traffic_csv(text.as_bytes()).unwrap(), cache);
    }
}
