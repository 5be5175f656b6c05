//! Sequence number type for append-only histories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a link within an identity's history.
///
/// Seqnos are 1-based and dense: the n-th link of a chain carries seqno n.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seqno(u64);

impl Seqno {
    /// The seqno of the first link in any chain.
    pub const FIRST: Self = Self(1);

    pub fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Seqno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
