//! Per-edge attributes.

use sn_core::GeoPoint;

use crate::{GraphError, GraphResult};

/// Attributes of one directed street edge.
///
/// Fields are private so every instance has passed [`EdgeData::new`]:
/// the length is finite and non-negative, and a curve, when present, has at
/// least its two endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeData {
    length_m: f64,
    oneway:   bool,
    geometry: Option<Vec<GeoPoint>>,
}

impl EdgeData {
    /// Validate and construct edge data.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEdgeData`] if `length_m` is negative or not
    /// finite, or if `geometry` has fewer than two points.
    pub fn new(length_m: f64, oneway: bool, geometry: Option<Vec<GeoPoint>>) -> GraphResult<Self> {
        if !length_m.is_finite() || length_m < 0.0 {
            return Err(GraphError::InvalidEdgeData(format!(
                "length {length_m} m is not a finite non-negative number"
            )));
        }
        if let Some(points) = &geometry {
            if points.len() < 2 {
                return Err(GraphError::InvalidEdgeData(format!(
                    "curve geometry has {} point(s), need at least 2",
                    points.len()
                )));
            }
        }
        Ok(Self { length_m, oneway, geometry })
    }

    /// A straight edge with no curve geometry.
    pub fn straight(length_m: f64, oneway: bool) -> GraphResult<Self> {
        Self::new(length_m, oneway, None)
    }

    /// Length in metres, precomputed when the edge was created.
    #[inline]
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    #[inline]
    pub fn is_oneway(&self) -> bool {
        self.oneway
    }

    /// Full curve including both endpoints, if the edge carries one.
    #[inline]
    pub fn geometry(&self) -> Option<&[GeoPoint]> {
        self.geometry.as_deref()
    }

    /// Curve points strictly between the two endpoints.  Empty for straight
    /// edges.
    pub fn interior_points(&self) -> &[GeoPoint] {
        match &self.geometry {
            Some(points) => &points[1..points.len() - 1],
            None => &[],
        }
    }

    /// The same edge traversed in the opposite direction (curve reversed).
    pub fn reversed(&self) -> EdgeData {
        EdgeData {
            length_m: self.length_m,
            oneway:   self.oneway,
            geometry: self.geometry.as_ref().map(|g| g.iter().rev().copied().collect()),
        }
    }
}
