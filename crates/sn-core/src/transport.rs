//! Travel-mode presets.
//!
//! The routing engine itself only consumes a base speed in metres per second;
//! these presets are the values a user interface offers, not engine constants.
//! Callers with other vehicles pass their own speed to the session.

use std::str::FromStr;

use crate::CoreError;

/// Vehicle profile selected by the user.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot, ~4.3 km/h.
    #[default]
    Walk,
    /// Motorbike / moped, ~25 km/h in dense streets.
    Moped,
    /// Private car, ~30 km/h in dense streets.
    Car,
}

impl TravelMode {
    /// Base speed in metres per second, before any traffic slowdown.
    #[inline]
    pub fn speed_mps(self) -> f64 {
        match self {
            TravelMode::Walk  => 1.2,
            TravelMode::Moped => 6.9,
            TravelMode::Car   => 8.3,
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk  => "walk",
            TravelMode::Moped => "moped",
            TravelMode::Car   => "car",
        }
    }
}

impl FromStr for TravelMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" | "foot"               => Ok(TravelMode::Walk),
            "moped" | "motorbike"         => Ok(TravelMode::Moped),
            "car"                         => Ok(TravelMode::Car),
            _                             => Err(CoreError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a caller-supplied base speed.
pub fn validate_speed(speed_mps: f64) -> Result<f64, CoreError> {
    if speed_mps.is_finite() && speed_mps > 0.0 {
        Ok(speed_mps)
    } else {
        Err(CoreError::InvalidSpeed(speed_mps))
    }
}
