//! Congestion levels.
//!
//! | Level | Label     | Speed factor | Line weight |
//! |-------|-----------|--------------|-------------|
//! | 1     | clear     | 1.0          | 3           |
//! | 2     | clear     | 1.2          | 3           |
//! | 3     | normal    | 1.2          | 3           |
//! | 4     | normal    | 1.5          | 4           |
//! | 5     | congested | 1.5          | 4           |
//! | 6     | congested | 1.8          | 5           |
//! | 7     | blocked   | 2.0          | 6           |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{color_for, Rgb, TrafficError, TrafficResult};

/// Congestion level of a street segment, 1 (free-flowing) to 7 (jammed).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TrafficLevel(u8);

impl TrafficLevel {
    /// Level of every segment that has no stored entry.
    pub const CLEAR: TrafficLevel = TrafficLevel(1);
    pub const MAX: TrafficLevel = TrafficLevel(7);

    /// # Errors
    ///
    /// [`TrafficError::InvalidLevel`] outside `1..=7`.
    pub fn new(level: i64) -> TrafficResult<Self> {
        match level {
            1..=7 => Ok(TrafficLevel(level as u8)),
            _ => Err(TrafficError::InvalidLevel(level)),
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Travel-time multiplier; see [`speed_factor`].
    #[inline]
    pub fn speed_factor(self) -> f64 {
        speed_factor(self)
    }

    /// Stroke width used when drawing a segment at this level.
    pub fn line_weight(self) -> u32 {
        match self.0 {
            7 => 6,
            6 => 5,
            4 | 5 => 4,
            _ => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 | 2 => "clear",
            3 | 4 => "normal",
            5 | 6 => "congested",
            _ => "blocked",
        }
    }

    pub fn color(self) -> Rgb {
        color_for(f64::from(self.0))
    }
}

impl Default for TrafficLevel {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

impl TryFrom<i64> for TrafficLevel {
    type Error = TrafficError;
    fn try_from(level: i64) -> TrafficResult<Self> {
        TrafficLevel::new(level)
    }
}

impl From<TrafficLevel> for i64 {
    fn from(level: TrafficLevel) -> i64 {
        i64::from(level.0)
    }
}

/// Multiplier applied to the free-flow travel time of a segment.
pub fn speed_factor(level: TrafficLevel) -> f64 {
    match level.0 {
        1 => 1.0,
        2 | 3 => 1.2,
        4 | 5 => 1.5,
        6 => 1.8,
        _ => 2.0,
    }
}

/// The four colour anchors of the gradient, for a map legend.
pub fn legend() -> [(TrafficLevel, Rgb); 4] {
    [1u8, 3, 5, 7].map(|l| {
        let level = TrafficLevel(l);
        (level, level.color())
    })
}
