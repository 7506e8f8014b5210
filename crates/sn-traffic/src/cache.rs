//! Traffic level storage.
//!
//! Levels are keyed by the unordered node pair of a segment, so both travel
//! directions of a road share one entry.  A segment without an entry is
//! [`TrafficLevel::CLEAR`].

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use rustc_hash::FxHashMap;

use sn_core::{NodeId, NodePair};

use crate::TrafficLevel;

/// Read access to per-segment levels, as needed by time estimates and the
/// overlay.
pub trait TrafficLevels {
    /// Level of the segment between `a` and `b` (either order).
    fn level(&self, a: NodeId, b: NodeId) -> TrafficLevel;
}

// ── TrafficCache ──────────────────────────────────────────────────────────────

/// Single-owner map from segment to level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrafficCache {
    levels: FxHashMap<NodePair, TrafficLevel>,
}

impl TrafficCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `level` for the segment `a – b`, returning the previous entry.
    pub fn set_level(&mut self, a: NodeId, b: NodeId, level: TrafficLevel) -> Option<TrafficLevel> {
        self.levels.insert(NodePair::new(a, b), level)
    }

    /// Stored level, [`TrafficLevel::CLEAR`] if none.
    pub fn level(&self, a: NodeId, b: NodeId) -> TrafficLevel {
        self.get(a, b).unwrap_or_default()
    }

    pub fn get(&self, a: NodeId, b: NodeId) -> Option<TrafficLevel> {
        self.levels.get(&NodePair::new(a, b)).copied()
    }

    pub fn remove(&mut self, a: NodeId, b: NodeId) -> Option<TrafficLevel> {
        self.levels.remove(&NodePair::new(a, b))
    }

    /// Apply `level` to every segment of a node path.  Returns the number of
    /// segments written.
    pub fn set_route_level(&mut self, nodes: &[NodeId], level: TrafficLevel) -> usize {
        for w in nodes.windows(2) {
            self.set_level(w[0], w[1], level);
        }
        let written = nodes.len().saturating_sub(1);
        debug!("traffic level {level} applied to {written} segments");
        written
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (NodePair, TrafficLevel)> + '_ {
        self.levels.iter().map(|(&k, &v)| (k, v))
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

impl TrafficLevels for TrafficCache {
    fn level(&self, a: NodeId, b: NodeId) -> TrafficLevel {
        TrafficCache::level(self, a, b)
    }
}

impl FromIterator<(NodeId, NodeId, TrafficLevel)> for TrafficCache {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId, TrafficLevel)>>(iter: I) -> Self {
        let mut cache = TrafficCache::new();
        for (a, b, level) in iter {
            cache.set_level(a, b, level);
        }
        cache
    }
}

// ── SharedTrafficCache ────────────────────────────────────────────────────────

/// Cloneable handle to one cache shared between threads.
///
/// Writers are serialized; readers always see a complete set of writes.  A
/// panic while holding the lock cannot leave an entry half-written, so a
/// poisoned lock is recovered rather than propagated.
#[derive(Clone, Debug, Default)]
pub struct SharedTrafficCache {
    inner: Arc<RwLock<TrafficCache>>,
}

impl SharedTrafficCache {
    pub fn new(cache: TrafficCache) -> Self {
        Self { inner: Arc::new(RwLock::new(cache)) }
    }

    pub fn set_level(&self, a: NodeId, b: NodeId, level: TrafficLevel) -> Option<TrafficLevel> {
        self.write(|c| c.set_level(a, b, level))
    }

    /// Writes every segment under a single lock acquisition.
    pub fn set_route_level(&self, nodes: &[NodeId], level: TrafficLevel) -> usize {
        self.write(|c| c.set_route_level(nodes, level))
    }

    pub fn remove(&self, a: NodeId, b: NodeId) -> Option<TrafficLevel> {
        self.write(|c| c.remove(a, b))
    }

    pub fn len(&self) -> usize {
        self.read(TrafficCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(TrafficCache::is_empty)
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> TrafficCache {
        self.read(TrafficCache::clone)
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&TrafficCache) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut TrafficCache) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl TrafficLevels for SharedTrafficCache {
    fn level(&self, a: NodeId, b: NodeId) -> TrafficLevel {
        self.read(|c| c.level(a, b))
    }
}

impl From<TrafficCache> for SharedTrafficCache {
    fn from(cache: TrafficCache) -> Self {
        Self::new(cache)
    }
}
