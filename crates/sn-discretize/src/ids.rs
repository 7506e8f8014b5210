//! Synthetic node ids.
//!
//! Ids for nodes created during discretization come from a pool prepared
//! ahead of time (and usually stored next to the raw network, see
//! `sn_graph::read_id_pool`).  The allocator hands them out strictly in
//! order so a run is reproducible from the same pool.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sn_core::NodeId;
use sn_graph::StreetGraph;

use crate::{DiscretizeError, DiscretizeResult};

/// Upper bound (exclusive) for generated ids: 2^53, the largest range a
/// JSON consumer parsing numbers as doubles still reads exactly.
const MAX_GENERATED_ID: u64 = 1 << 53;

/// Cursor over a pool of unused node ids.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    pool:   Vec<NodeId>,
    cursor: usize,
}

impl IdAllocator {
    pub fn new(pool: Vec<NodeId>) -> Self {
        Self { pool, cursor: 0 }
    }

    /// Take the next id from the pool.
    ///
    /// # Errors
    ///
    /// [`DiscretizeError::IdPoolExhausted`] once every id has been handed
    /// out.  There is no wraparound.
    pub fn next_id(&mut self) -> DiscretizeResult<NodeId> {
        let id = self.pool.get(self.cursor).copied().ok_or(DiscretizeError::IdPoolExhausted {
            pool_size: self.pool.len(),
            requested: self.cursor + 1,
        })?;
        self.cursor += 1;
        Ok(id)
    }

    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.pool.len() - self.cursor
    }

    #[inline]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Fail unless `count` more ids can be handed out.  Takes nothing.
    ///
    /// # Errors
    ///
    /// [`DiscretizeError::IdPoolExhausted`] naming the last id the request
    /// would need.
    pub fn ensure_available(&self, count: usize) -> DiscretizeResult<()> {
        if count > self.remaining() {
            return Err(DiscretizeError::IdPoolExhausted {
                pool_size: self.pool_size(),
                requested: self.consumed().saturating_add(count),
            });
        }
        Ok(())
    }
}

/// Draw `count` distinct random ids that collide with no node in `graph`.
///
/// Deterministic for a given `seed` and graph.
pub fn generate_id_pool(count: usize, seed: u64, graph: &StreetGraph) -> Vec<NodeId> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut seen: HashSet<u64> = HashSet::with_capacity(count);
    let mut pool = Vec::with_capacity(count);

    while pool.len() < count {
        let raw = rng.gen_range(1..MAX_GENERATED_ID);
        if graph.contains_node(NodeId(raw)) || !seen.insert(raw) {
            continue;
        }
        pool.push(NodeId(raw));
    }
    pool
}
