//! Nesting depth of a generated macro.

use crate::error::{MacrogenError, Result};
use std::fmt;
use std::num::NonZeroUsize;

/// Maximum nesting depth of a BSON document, and the default generation depth.
pub const MAX_BSON_DEPTH: usize = 100;

/// A nesting depth, always at least 1.
///
/// Zero and negative values are rejected at construction, so anything that
/// takes a `Depth` can assume a valid level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(NonZeroUsize);

impl Depth {
    pub const ONE: Depth = Depth(NonZeroUsize::MIN);

    pub fn new(depth: usize) -> Result<Self> {
        NonZeroUsize::new(depth)
            .map(Depth)
            .ok_or(MacrogenError::InvalidDepth { depth: 0 })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The depth one level up, or `None` at the base case.
    pub fn parent(self) -> Option<Depth> {
        NonZeroUsize::new(self.get() - 1).map(Depth)
    }

    /// Depths `1..=self`, in increasing order.
    pub fn levels(self) -> impl Iterator<Item = Depth> {
        (1..=self.get()).filter_map(|n| NonZeroUsize::new(n).map(Depth))
    }

    pub fn exceeds_bson_limit(self) -> bool {
        self.get() > MAX_BSON_DEPTH
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth(NonZeroUsize::new(MAX_BSON_DEPTH).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<i64> for Depth {
    type Error = MacrogenError;

    fn try_from(depth: i64) -> Result<Self> {
        usize::try_from(depth)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Depth)
            .ok_or(MacrogenError::InvalidDepth { depth })
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
