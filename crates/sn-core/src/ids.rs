//! Strongly typed node identifiers.
//!
//! Node ids are sparse 64-bit values (OSM ids and synthetic ids drawn from a
//! pool), so unlike dense simulation indices they are used as map keys, never
//! as `Vec` indices.

use std::fmt;

/// Identifier of a street-network node.
///
/// Original ids come from the raw network; synthetic ids are drawn from a
/// reserved pool during discretization.  The two spaces must not collide.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    #[inline(always)]
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}

/// An unordered pair of nodes, canonicalized so that `lo <= hi`.
///
/// `NodePair::new(a, b) == NodePair::new(b, a)` — used as the key for
/// direction-independent per-segment attributes such as traffic levels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodePair {
    lo: NodeId,
    hi: NodeId,
}

impl NodePair {
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller id of the pair.
    #[inline]
    pub fn lo(self) -> NodeId {
        self.lo
    }

    /// The larger id of the pair.
    #[inline]
    pub fn hi(self) -> NodeId {
        self.hi
    }
}

impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.lo.0, self.hi.0)
    }
}
