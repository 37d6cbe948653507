//! Square matrices of [`Polynomial`]s: the representation of a
//! dependency relation between an ordered set of variables (§3, §4.4
//! of the design). Row `i` is the source variable, column `j` the
//! target.

use ndarray::Array2;

use crate::algebra::{Monomial, Polynomial, Scalar};
use crate::error::AnalyzerError;

/// A square `n x n` array of normalized polynomials.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    cells: Array2<Polynomial>,
}

impl Matrix {
    pub fn dim(&self) -> usize {
        self.cells.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> &Polynomial {
        &self.cells[[row, col]]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Polynomial) {
        self.cells[[row, col]] = value;
    }

    /// Diagonal `m`, off-diagonal `0` — the identity for matrix
    /// product.
    pub fn identity(n: usize) -> Self {
        let mut cells = Array2::from_elem((n, n), Polynomial::zero());
        for i in 0..n {
            cells[[i, i]] = Polynomial::constant(Scalar::M);
        }
        Matrix { cells }
    }

    /// The `n x n` matrix of all-zero polynomials.
    pub fn zero(n: usize) -> Self {
        Matrix { cells: Array2::from_elem((n, n), Polynomial::zero()) }
    }

    /// Elementwise polynomial addition.
    pub fn sum(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.dim(), other.dim(), "sum of matrices of differing dimension");
        let n = self.dim();
        let mut out = Array2::from_elem((n, n), Polynomial::zero());
        for i in 0..n {
            for j in 0..n {
                out[[i, j]] = self.cells[[i, j]].add(&other.cells[[i, j]]);
            }
        }
        Matrix { cells: out }
    }

    /// Standard matrix product under polynomial add/mul.
    pub fn product(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.dim(), other.dim(), "product of matrices of differing dimension");
        let n = self.dim();
        let mut out = Array2::from_elem((n, n), Polynomial::zero());
        for i in 0..n {
            for j in 0..n {
                let mut acc = Polynomial::zero();
                for k in 0..n {
                    acc = acc.add(&self.cells[[i, k]].mul(&other.cells[[k, j]]));
                }
                out[[i, j]] = acc;
            }
        }
        Matrix { cells: out }
    }

    pub fn equals(&self, other: &Matrix) -> bool {
        self.cells == other.cells
    }

    /// Embeds `self` (an `n x n` matrix over a smaller variable set)
    /// into a `new_dim x new_dim` matrix. `old_to_new[i]` gives the
    /// row/column in the embedding that old index `i` maps to.
    /// Positions not covered by the mapping are filled with the
    /// identity's entries — `m` on the diagonal, `0` off it — this
    /// is the homogenization step of §4.4/§4.5.
    pub fn resize(&self, new_dim: usize, old_to_new: &[usize]) -> Matrix {
        assert_eq!(old_to_new.len(), self.dim());
        let mut out = Matrix::identity(new_dim);
        for i in 0..self.dim() {
            for j in 0..self.dim() {
                out.cells[[old_to_new[i], old_to_new[j]]] = self.cells[[i, j]].clone();
            }
        }
        out
    }

    /// Least `R*` such that `R* = I (+) (R* . R)`, computed by
    /// iterating `S(k+1) = S(k) (+) (S(k) . R)` from `S(0) = I` to a
    /// fixed point (§4.6). `iteration_cap` guards against a
    /// programming error breaking the proven termination argument;
    /// it is never expected to trigger on a conforming input.
    ///
    /// A `p`-class self-dependency surviving on the diagonal after an
    /// iteration means the loop body reinforces that variable at
    /// polynomial strength on every pass; repeating that without a
    /// bound on the iteration count is no longer itself bounded by a
    /// polynomial, so each such diagonal entry is escalated to
    /// `infinity` before checking for convergence. This (plus
    /// [`Matrix::escalate_unbounded_accumulation`], applied by callers
    /// that know the loop is unbounded) is the only place `infinity`
    /// ever enters a matrix — the scalar table of §4.1 alone has no
    /// way to produce it from finite inputs.
    pub fn fixpoint(&self, iteration_cap: usize) -> Result<Matrix, AnalyzerError> {
        let n = self.dim();
        let mut current = Matrix::identity(n);
        for _ in 0..iteration_cap {
            let next = current.sum(&current.product(self)).escalate_polynomial_self_loops();
            if next.equals(&current) {
                return Ok(next);
            }
            current = next;
        }
        Err(AnalyzerError::FixpointDidNotConverge { iteration_cap })
    }

    /// Promotes every `p`-class monomial on the diagonal to `infinity`,
    /// leaving everything else untouched. Used by [`Matrix::fixpoint`]
    /// once per iteration; see that method's doc comment for why.
    fn escalate_polynomial_self_loops(&self) -> Matrix {
        let n = self.dim();
        let mut out = self.clone();
        for i in 0..n {
            let cell = self.get(i, i);
            if !cell.monomials().iter().any(|m| m.coefficient() == Scalar::P) {
                continue;
            }
            let escalated: Vec<Monomial> = cell
                .monomials()
                .iter()
                .map(|m| {
                    if m.coefficient() == Scalar::P {
                        Monomial::new(Scalar::Infinite, m.deltas().to_vec())
                    } else {
                        m.clone()
                    }
                })
                .collect();
            out.set(i, i, Polynomial::new(escalated));
        }
        out
    }

    /// Catches the accumulator unsoundness a diagonal-only escalation
    /// misses: a variable `j` that retains some part of its own prior
    /// value on every pass of an a-priori-unbounded loop (`body`'s own
    /// `(j,j)` cell is non-zero) while also folding in *any* `>= w`
    /// contribution from elsewhere in the same pass. Repeating that
    /// fold an unknown number of times is not dominated by a fixed
    /// polynomial even when the self term itself never exceeds `m` —
    /// `x1 := x2 + x1` is the textbook case: the self term stays `m`
    /// forever (`m*m=m` never compounds), yet `x2`'s `p`-class
    /// contribution is folded back in on every iteration, so `x1`
    /// grows without bound as the (unknown) iteration count grows.
    ///
    /// `j` with a zero diagonal in `body` is a plain overwrite (the
    /// assignment never reads its own target), not an accumulator —
    /// repeating it any number of times just recomputes the same
    /// value from loop-invariant sources, so its column is left alone
    /// regardless of what class those sources carry.
    ///
    /// Called only for unbounded (`while`) loops; a bounded `for` loop
    /// composes an explicit `p`-class dependency on the guard variable
    /// afterward instead (§9), which already accounts for a bounded
    /// accumulator without needing this escalation.
    pub fn escalate_unbounded_accumulation(&self, body: &Matrix) -> Matrix {
        let n = self.dim();
        let mut out = self.clone();
        for j in 0..n {
            if body.get(j, j).is_zero() {
                continue;
            }
            for i in 0..n {
                let cell = self.get(i, j);
                if !cell.monomials().iter().any(|m| m.coefficient() >= Scalar::W) {
                    continue;
                }
                let escalated: Vec<Monomial> = cell
                    .monomials()
                    .iter()
                    .map(|m| {
                        if m.coefficient() >= Scalar::W {
                            Monomial::new(Scalar::Infinite, m.deltas().to_vec())
                        } else {
                            m.clone()
                        }
                    })
                    .collect();
                out.set(i, j, Polynomial::new(escalated));
            }
        }
        out
    }
}
