//! Fluent builder for constructing a [`Session`].

use sn_core::{validate_speed, TravelMode};
use sn_spatial::{RoadNetwork, Router};
use sn_traffic::TrafficCache;

use crate::{Session, SessionResult};

/// Fluent builder for [`Session<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                          |
/// |--------------------|----------------------------------|
/// | `.mode(m)`         | `TravelMode::Walk`               |
/// | `.base_speed(mps)` | the mode's preset speed          |
/// | `.traffic(cache)`  | empty cache (everything clear)   |
pub struct SessionBuilder<'n, R: Router> {
    network:    &'n RoadNetwork,
    router:     R,
    mode:       TravelMode,
    base_speed: Option<f64>,
    traffic:    Option<TrafficCache>,
}

impl<'n, R: Router> SessionBuilder<'n, R> {
    pub fn new(network: &'n RoadNetwork, router: R) -> Self {
        Self {
            network,
            router,
            mode:       TravelMode::default(),
            base_speed: None,
            traffic:    None,
        }
    }

    pub fn mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the mode's preset speed, in metres per second.
    pub fn base_speed(mut self, mps: f64) -> Self {
        self.base_speed = Some(mps);
        self
    }

    pub fn traffic(mut self, cache: TrafficCache) -> Self {
        self.traffic = Some(cache);
        self
    }

    /// # Errors
    ///
    /// [`CoreError::InvalidSpeed`](sn_core::CoreError::InvalidSpeed) for a
    /// non-positive or non-finite explicit speed.
    pub fn build(self) -> SessionResult<Session<'n, R>> {
        let base_speed_mps = match self.base_speed {
            Some(mps) => validate_speed(mps)?,
            None => self.mode.speed_mps(),
        };

        Ok(Session {
            network: self.network,
            router:  self.router,
            mode:    self.mode,
            base_speed_mps,
            traffic: self.traffic.unwrap_or_default(),
        })
    }
}
