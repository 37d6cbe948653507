//! A scalar coefficient guarded by a strictly index-ordered sequence
//! of [`Delta`] choices: the coefficient applies exactly when every
//! delta in the sequence holds.

use std::fmt;

use super::delta::Delta;
use super::scalar::Scalar;

/// `coefficient` applied when every delta in `deltas` holds
/// simultaneously. `deltas` is always kept sorted strictly by index;
/// a monomial built from contradictory deltas collapses to
/// coefficient [`Scalar::Zero`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    coefficient: Scalar,
    deltas: Vec<Delta>,
}

impl Monomial {
    /// Builds a monomial from an unsorted, possibly-contradictory
    /// delta list. Contradictory deltas (same index, different
    /// value) annihilate the coefficient to `0`; duplicate
    /// non-contradictory deltas at the same index are collapsed.
    pub fn new(coefficient: Scalar, mut deltas: Vec<Delta>) -> Self {
        deltas.sort_by_key(|d| d.index);
        deltas.dedup();

        for window in deltas.windows(2) {
            if window[0].contradicts(&window[1]) {
                return Monomial {
                    coefficient: Scalar::Zero,
                    deltas: Vec::new(),
                };
            }
        }

        if coefficient.is_zero() {
            return Monomial {
                coefficient: Scalar::Zero,
                deltas: Vec::new(),
            };
        }

        Monomial { coefficient, deltas }
    }

    /// A monomial with no deltas: the coefficient always applies.
    pub fn constant(coefficient: Scalar) -> Self {
        Monomial::new(coefficient, Vec::new())
    }

    pub fn zero() -> Self {
        Monomial::constant(Scalar::Zero)
    }

    pub fn coefficient(&self) -> Scalar {
        self.coefficient
    }

    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn contains(&self, delta: &Delta) -> bool {
        self.deltas.contains(delta)
    }

    /// Scalar-multiplies coefficients and merges delta sequences.
    /// Matching indices must agree on value or the product is `0`.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        if self.is_zero() || other.is_zero() {
            return Monomial::zero();
        }

        let mut merged = self.deltas.clone();
        for d in &other.deltas {
            if let Some(existing) = merged.iter().find(|e| e.index == d.index) {
                if existing.value != d.value {
                    return Monomial::zero();
                }
            } else {
                merged.push(*d);
            }
        }

        Monomial::new(self.coefficient.mul(other.coefficient), merged)
    }

    /// Whether a fully-resolved choice vector (one chosen value per
    /// index) satisfies every delta in this monomial.
    pub fn satisfied_by(&self, choice: &[u8]) -> bool {
        self.deltas
            .iter()
            .all(|d| choice.get(d.index).is_some_and(|v| *v == d.value))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deltas.is_empty() {
            return write!(f, "{}", self.coefficient);
        }
        write!(f, "{}*", self.coefficient)?;
        for (i, d) in self.deltas.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
