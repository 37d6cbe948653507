//! The five-element mwp semiring: `{0, m, w, p, infinity}` ordered
//! `0 < m < w < p < infinity`, with `add` as least-upper-bound and a
//! table-defined `mul`.

use std::fmt;

/// A coefficient describing the strength of a data dependency.
///
/// Variants are listed in increasing order so that derived
/// `PartialOrd`/`Ord` matches the semiring's total order directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// No dependency.
    Zero,
    /// A dependency that neither increases nor multiplies a value.
    M,
    /// A weak-polynomial dependency.
    W,
    /// A polynomial dependency.
    P,
    /// An unbounded dependency; once present on a path the analysis
    /// reports infinite growth for that flow.
    Infinite,
}

impl Scalar {
    /// Least upper bound of the order `0 < m < w < p < infinity`.
    pub fn add(self, other: Scalar) -> Scalar {
        self.max(other)
    }

    /// Table-defined multiplication: `m` is identity, `0` absorbs,
    /// `infinity` absorbs every non-zero scalar, and `w * w = p`
    /// with `p` absorbing `w` and itself.
    pub fn mul(self, other: Scalar) -> Scalar {
        use Scalar::*;
        match (self, other) {
            (Zero, _) | (_, Zero) => Zero,
            (M, x) | (x, M) => x,
            (Infinite, _) | (_, Infinite) => Infinite,
            (W, W) => P,
            (W, P) | (P, W) | (P, P) => P,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Scalar::Zero
    }

    pub fn is_infinite(self) -> bool {
        self == Scalar::Infinite
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scalar::Zero => "0",
            Scalar::M => "m",
            Scalar::W => "w",
            Scalar::P => "p",
            Scalar::Infinite => "infinity",
        };
        write!(f, "{s}")
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Zero
    }
}
