//! Unit tests for sn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, NodePair};

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(10_130_399_575) > NodeId(104_782_499));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }

    #[test]
    fn pair_is_order_independent() {
        let ab = NodePair::new(NodeId(200), NodeId(100));
        let ba = NodePair::new(NodeId(100), NodeId(200));
        assert_eq!(ab, ba);
        assert_eq!(ab.lo(), NodeId(100));
        assert_eq!(ab.hi(), NodeId(200));
    }

    #[test]
    fn pair_with_itself() {
        let p = NodePair::new(NodeId(5), NodeId(5));
        assert_eq!(p.lo(), p.hi());
    }
}

#[cfg(test)]
mod geo {
    use crate::{polyline_length_m, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(21.002_85, 105.840_84);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn near_identical_points_are_not_nan() {
        // Rounding in the law of cosines can push the cosine above 1 for
        // points this close.
        let a = GeoPoint::new(21.002_850_000_1, 105.840_840_000_1);
        let b = GeoPoint::new(21.002_850_000_2, 105.840_840_000_2);
        let d = a.distance_m(b);
        assert!(d.is_finite(), "got {d}");
        assert!(d < 0.5, "got {d}");
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (GeoPoint::new(21.0, 105.8), GeoPoint::new(21.001, 105.802)),
            (GeoPoint::new(-33.9, 151.2), GeoPoint::new(51.5, -0.12)),
            (GeoPoint::new(0.0, 179.9), GeoPoint::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_m(b), b.distance_m(a));
        }
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(21.0, 105.8);
        let b = GeoPoint::new(22.0, 105.8);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn interpolate_endpoints_and_midpoint() {
        let a = GeoPoint::new(21.0, 105.8);
        let b = GeoPoint::new(21.002, 105.804);
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
        let mid = a.interpolate(b, 0.5);
        assert!((mid.lat - 21.001).abs() < 1e-12);
        assert!((mid.lon - 105.802).abs() < 1e-12);
        // Halves agree to within a few parts per million at this scale.
        let total = a.distance_m(b);
        assert!((a.distance_m(mid) - mid.distance_m(b)).abs() < 1e-5 * total);
    }

    #[test]
    fn interpolate_clamps_fraction() {
        let a = GeoPoint::new(21.0, 105.8);
        let b = GeoPoint::new(21.1, 105.9);
        assert_eq!(a.interpolate(b, -0.5), a);
        assert_eq!(a.interpolate(b, 1.5), b);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let a = GeoPoint::new(21.0, 105.8);
        let b = GeoPoint::new(21.0003, 105.8);
        let c = GeoPoint::new(21.0003, 105.8004);
        let total = polyline_length_m(&[a, b, c]);
        assert!((total - (a.distance_m(b) + b.distance_m(c))).abs() < 1e-9);
        assert_eq!(polyline_length_m(&[a]), 0.0);
        assert_eq!(polyline_length_m(&[]), 0.0);
    }
}

#[cfg(test)]
mod transport {
    use crate::{validate_speed, CoreError, TravelMode};

    #[test]
    fn preset_speeds() {
        assert_eq!(TravelMode::Walk.speed_mps(), 1.2);
        assert_eq!(TravelMode::Moped.speed_mps(), 6.9);
        assert_eq!(TravelMode::Car.speed_mps(), 8.3);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Car".parse::<TravelMode>().unwrap(), TravelMode::Car);
        assert_eq!(" walk ".parse::<TravelMode>().unwrap(), TravelMode::Walk);
        assert_eq!(TravelMode::Moped.to_string(), "moped");
        assert!(matches!(
            "hovercraft".parse::<TravelMode>(),
            Err(CoreError::UnknownMode(_))
        ));
    }

    #[test]
    fn speed_validation() {
        assert_eq!(validate_speed(1.2).unwrap(), 1.2);
        assert!(validate_speed(0.0).is_err());
        assert!(validate_speed(-3.0).is_err());
        assert!(validate_speed(f64::NAN).is_err());
    }
}
