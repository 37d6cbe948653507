//! Normalized sums of [`Monomial`]s: no two monomials share a delta
//! sequence, no monomial has coefficient `0`, and monomials are kept
//! in a stable order so that structurally equal polynomials compare
//! equal regardless of construction order.

use std::fmt;

use super::delta::Delta;
use super::monomial::Monomial;
use super::scalar::Scalar;

/// The sum of its monomials; the empty polynomial is `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    monomials: Vec<Monomial>,
}

fn delta_key(deltas: &[Delta]) -> Vec<(usize, u8)> {
    deltas.iter().map(|d| (d.index, d.value)).collect()
}

impl Polynomial {
    /// Normalizes an arbitrary list of monomials into the normal
    /// form described in the module docs.
    pub fn new(monomials: Vec<Monomial>) -> Self {
        let mut merged: Vec<Monomial> = Vec::with_capacity(monomials.len());
        for m in monomials {
            if m.is_zero() {
                continue;
            }
            if let Some(existing) = merged
                .iter_mut()
                .find(|e| delta_key(e.deltas()) == delta_key(m.deltas()))
            {
                *existing = Monomial::new(existing.coefficient().add(m.coefficient()), existing.deltas().to_vec());
            } else {
                merged.push(m);
            }
        }
        merged.retain(|m| !m.is_zero());
        merged.sort_by(|a, b| delta_key(a.deltas()).cmp(&delta_key(b.deltas())));
        Polynomial { monomials: merged }
    }

    pub fn zero() -> Self {
        Polynomial { monomials: Vec::new() }
    }

    pub fn constant(s: Scalar) -> Self {
        Polynomial::new(vec![Monomial::constant(s)])
    }

    pub fn from_monomial(m: Monomial) -> Self {
        Polynomial::new(vec![m])
    }

    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    pub fn is_zero(&self) -> bool {
        self.monomials.is_empty()
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut all = self.monomials.clone();
        all.extend(other.monomials.iter().cloned());
        Polynomial::new(all)
    }

    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut product = Vec::with_capacity(self.monomials.len() * other.monomials.len());
        for a in &self.monomials {
            for b in &other.monomials {
                product.push(a.mul(b));
            }
        }
        Polynomial::new(product)
    }

    /// Substitutes a fully-resolved choice vector, collapsing the
    /// polynomial to the least-upper-bound of every monomial whose
    /// delta sequence the choice satisfies (unsatisfied monomials
    /// contribute `0`). Used during bound extraction (§4.9) once a
    /// surviving choice vector picks one representative derivation.
    pub fn eval(&self, choice: &[u8]) -> Scalar {
        self.monomials
            .iter()
            .filter(|m| m.satisfied_by(choice))
            .fold(Scalar::Zero, |acc, m| acc.add(m.coefficient()))
    }

    /// The delta sequence of the monomial responsible for this
    /// polynomial's evaluated class under `choice`. When several
    /// satisfied monomials tie at that class, prefers the longest
    /// sequence — the one whose class arose through the most
    /// compounding multiplications (§4.1's `w*w=p`). Used by bound
    /// extraction (§4.9) to tell whether two sources reaching the same
    /// target passed through the same conditional derivation, the
    /// signal for rendering them as a product rather than a sum.
    pub fn witness_deltas(&self, choice: &[u8]) -> Vec<Delta> {
        let class = self.eval(choice);
        self.monomials
            .iter()
            .filter(|m| m.satisfied_by(choice) && m.coefficient() == class)
            .map(|m| m.deltas().to_vec())
            .max_by_key(|ds| ds.len())
            .unwrap_or_default()
    }

    /// All delta sequences appearing in this polynomial whose
    /// coefficient is `infinity` — the raw material for the choice
    /// simplifier's failure-sequence set (§4.8).
    pub fn infinite_sequences(&self) -> Vec<Vec<Delta>> {
        self.monomials
            .iter()
            .filter(|m| m.coefficient() == Scalar::Infinite)
            .map(|m| m.deltas().to_vec())
            .collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomials.is_empty() {
            return write!(f, "0");
        }
        for (i, m) in self.monomials.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::delta::Delta;

    fn d(v: u8, j: usize) -> Delta {
        Delta::new(v, j)
    }

    #[test]
    fn normal_form_merges_same_delta_sequence() {
        let p = Polynomial::new(vec![
            Monomial::new(Scalar::M, vec![d(0, 1)]),
            Monomial::new(Scalar::W, vec![d(0, 1)]),
        ]);
        assert_eq!(p.monomials().len(), 1);
        assert_eq!(p.monomials()[0].coefficient(), Scalar::W);
    }

    #[test]
    fn normal_form_drops_zero_coefficients() {
        let p = Polynomial::new(vec![Monomial::constant(Scalar::Zero)]);
        assert!(p.is_zero());
    }

    #[test]
    fn normal_form_is_idempotent() {
        let p = Polynomial::new(vec![
            Monomial::new(Scalar::M, vec![d(1, 2)]),
            Monomial::constant(Scalar::W),
        ]);
        let renormalized = Polynomial::new(p.monomials().to_vec());
        assert_eq!(p, renormalized);
    }

    #[test]
    fn add_is_commutative_and_idempotent() {
        let a = Polynomial::constant(Scalar::M);
        let b = Polynomial::from_monomial(Monomial::new(Scalar::W, vec![d(0, 1)]));
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.add(&a), a);
    }

    #[test]
    fn zero_is_add_identity_and_mul_absorber() {
        let a = Polynomial::from_monomial(Monomial::new(Scalar::P, vec![d(0, 1)]));
        assert_eq!(a.add(&Polynomial::zero()), a);
        assert!(a.mul(&Polynomial::zero()).is_zero());
    }

    #[test]
    fn mul_distributes_over_add() {
        let a = Polynomial::constant(Scalar::M);
        let b = Polynomial::from_monomial(Monomial::new(Scalar::W, vec![d(0, 1)]));
        let c = Polynomial::from_monomial(Monomial::new(Scalar::P, vec![d(1, 2)]));
        let lhs = a.mul(&b.add(&c));
        let rhs = a.mul(&b).add(&a.mul(&c));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn eval_substitutes_choice_vector() {
        let p = Polynomial::new(vec![
            Monomial::new(Scalar::M, vec![d(0, 0)]),
            Monomial::new(Scalar::P, vec![d(1, 0)]),
        ]);
        assert_eq!(p.eval(&[0]), Scalar::M);
        assert_eq!(p.eval(&[1]), Scalar::P);
    }

    #[test]
    fn witness_deltas_picks_the_satisfied_monomial_at_the_evaluated_class() {
        let p = Polynomial::new(vec![
            Monomial::new(Scalar::M, vec![d(0, 0)]),
            Monomial::new(Scalar::P, vec![d(1, 0)]),
        ]);
        assert_eq!(p.witness_deltas(&[0]), vec![d(0, 0)]);
        assert_eq!(p.witness_deltas(&[1]), vec![d(1, 0)]);
    }

    #[test]
    fn witness_deltas_is_empty_for_an_unconditional_monomial() {
        let p = Polynomial::constant(Scalar::P);
        assert!(p.witness_deltas(&[]).is_empty());
    }

    #[test]
    fn infinite_sequences_collects_only_infinite_monomials() {
        let p = Polynomial::new(vec![
            Monomial::new(Scalar::Infinite, vec![d(0, 0)]),
            Monomial::new(Scalar::M, vec![d(1, 1)]),
        ]);
        let seqs = p.infinite_sequences();
        assert_eq!(seqs, vec![vec![d(0, 0)]]);
    }
}
