//! Congestion colour gradient.
//!
//! Green at level 1 through yellow (3) and orange (5) to red (7), linearly
//! interpolated between anchors with each channel truncated.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN:  Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const RED:    Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lower-case.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

const ANCHORS: [(f64, Rgb); 4] = [
    (1.0, Rgb::GREEN),
    (3.0, Rgb::YELLOW),
    (5.0, Rgb::ORANGE),
    (7.0, Rgb::RED),
];

/// Colour for a (possibly fractional) congestion level.
///
/// Levels below 1 or above 7 take the nearest anchor's colour; `NaN` is
/// treated as level 1.
pub fn color_for(level: f64) -> Rgb {
    let level = if level.is_nan() { 1.0 } else { level.clamp(1.0, 7.0) };

    for pair in ANCHORS.windows(2) {
        let ((lo, c0), (hi, c1)) = (pair[0], pair[1]);
        if level <= hi {
            let t = (level - lo) / (hi - lo);
            return Rgb::new(lerp(c0.r, c1.r, t), lerp(c0.g, c1.g, t), lerp(c0.b, c1.b, t));
        }
    }
    Rgb::RED
}

#[inline]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    // `as` truncates toward zero; the result is always within [0, 255].
    (a + (b - a) * t) as u8
}
