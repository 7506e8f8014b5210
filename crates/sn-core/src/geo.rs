//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Discretization works at the
//! metre scale (segments of a few metres), where `f32` rounding would already
//! be a visible fraction of a segment.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance in metres (spherical law of cosines).
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`: for near-identical
    /// points rounding can push it slightly above 1, which would yield `NaN`.
    /// Resolution near zero is limited to roughly 0.1 m by `f64` rounding of
    /// the cosine, which is why identical points short-circuit to exactly 0.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let cos_c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
        cos_c.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }

    /// Linear interpolation in lat/lon space.  `t` is clamped to `[0, 1]`.
    ///
    /// Not geodesically exact, but at the few-metre scale of discretization
    /// the error is far below coordinate precision.
    #[inline]
    pub fn interpolate(self, other: GeoPoint, t: f64) -> GeoPoint {
        let t = t.clamp(0.0, 1.0);
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Total length in metres of the polyline through `points`.
///
/// Zero for fewer than two points.
pub fn polyline_length_m(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}
