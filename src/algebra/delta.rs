//! A single non-deterministic derivation choice `(v, j)`: value `v in
//! {0, 1, 2}` picked at the `j`-th choice point created by the
//! analyzer (see `analysis::context`).

use std::cmp::Ordering;
use std::fmt;

/// One derivation choice at a program point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub value: u8,
    pub index: usize,
}

impl Delta {
    pub fn new(value: u8, index: usize) -> Self {
        debug_assert!(value <= 2, "delta value must be in {{0,1,2}}, got {value}");
        Delta { value, index }
    }

    /// Two deltas are contradictory when they name the same choice
    /// point but disagree on the value picked there.
    pub fn contradicts(&self, other: &Delta) -> bool {
        self.index == other.index && self.value != other.value
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.index)
    }
}

/// Deltas are ordered by index only; this is the order a
/// [`crate::algebra::monomial::Monomial`] keeps its delta sequence in.
impl PartialOrd for Delta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Delta {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
