//! `sn-traffic` — per-segment congestion levels and what they affect.
//!
//! Traffic never changes which path is chosen; it scales the travel time of
//! a route already found and drives the colour and weight of each drawn
//! segment.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`level`]   | `TrafficLevel` (1–7), speed factors, line weights, legend |
//! | [`color`]   | `Rgb`, `color_for` gradient                               |
//! | [`cache`]   | `TrafficCache`, `SharedTrafficCache`, `TrafficLevels`     |
//! | [`eta`]     | `Eta`, `estimate_time`                                    |
//! | [`overlay`] | `OverlaySegment`, `overlay_segments`                      |
//! | [`edits`]   | CSV import/export of traffic edits                        |
//! | [`error`]   | `TrafficError`, `TrafficResult<T>`                        |

pub mod cache;
pub mod color;
pub mod edits;
pub mod error;
pub mod eta;
pub mod level;
pub mod overlay;

#[cfg(test)]
mod tests;

pub use cache::{SharedTrafficCache, TrafficCache, TrafficLevels};
pub use color::{color_for, Rgb};
pub use edits::{load_traffic_csv, read_traffic_file, write_traffic_csv};
pub use error::{TrafficError, TrafficResult};
pub use eta::{estimate_time, Eta};
pub use level::{legend, speed_factor, TrafficLevel};
pub use overlay::{overlay_segments, OverlaySegment};
