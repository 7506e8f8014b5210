//! Discretization parameters.

use crate::{DiscretizeError, DiscretizeResult};

/// Tunables for [`Discretizer`](crate::Discretizer).
///
/// Typically left at the defaults or overridden from command-line flags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiscretizeConfig {
    /// Target segment length `S` in metres.  Straight edges longer than
    /// `2 * S` are split into equal pieces no longer than `S`.  Default: 6.
    pub min_segment_m: f64,

    /// Manually added edges whose endpoints are further apart than this are
    /// rejected.  Never applied to edges already in the raw network.
    /// Default: 500.
    pub max_manual_edge_m: f64,
}

impl Default for DiscretizeConfig {
    fn default() -> Self {
        Self {
            min_segment_m:     6.0,
            max_manual_edge_m: 500.0,
        }
    }
}

impl DiscretizeConfig {
    /// Reject non-finite or non-positive lengths.
    pub fn validate(&self) -> DiscretizeResult<()> {
        let check = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(DiscretizeError::Config(format!("{name} must be a positive number of metres, got {v}")))
            }
        };
        check("min_segment_m", self.min_segment_m)?;
        check("max_manual_edge_m", self.max_manual_edge_m)
    }
}
