//! A [`Matrix`] paired with the ordered list of variable names it is
//! indexed by, plus the disjunction of relations a conditional
//! branch produces (§4.5).

use super::matrix::Matrix;

/// A dependency matrix named over an ordered variable list.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    vars: Vec<String>,
    matrix: Matrix,
}

impl Relation {
    pub fn new(vars: Vec<String>, matrix: Matrix) -> Self {
        assert_eq!(vars.len(), matrix.dim(), "relation variable count must match matrix dimension");
        Relation { vars, matrix }
    }

    /// The identity relation over `vars` — no flows recorded yet.
    pub fn identity(vars: Vec<String>) -> Self {
        let n = vars.len();
        Relation { vars, matrix: Matrix::identity(n) }
    }

    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn index_of(&self, var: &str) -> Option<usize> {
        self.vars.iter().position(|v| v == var)
    }

    /// Unions `self.vars` and `other.vars` (preserving `self`'s order,
    /// then appending names new to `other`), homogenizes both
    /// matrices to the union's dimension, and returns the mapping
    /// each side's matrix was embedded under.
    fn align(&self, other: &Relation) -> (Vec<String>, Matrix, Matrix) {
        let mut union = self.vars.clone();
        for v in &other.vars {
            if !union.contains(v) {
                union.push(v.clone());
            }
        }

        let map = |vars: &[String]| -> Vec<usize> {
            vars.iter()
                .map(|v| union.iter().position(|u| u == v).expect("union contains every source var"))
                .collect()
        };

        let self_map = map(&self.vars);
        let other_map = map(&other.vars);

        let self_matrix = self.matrix.resize(union.len(), &self_map);
        let other_matrix = other.matrix.resize(union.len(), &other_map);
        (union, self_matrix, other_matrix)
    }

    /// `R1.compose(R2)`: align on the union of variable names, then
    /// take the matrix product (§4.5 step 1-3).
    pub fn compose(&self, other: &Relation) -> Relation {
        let (vars, a, b) = self.align(other);
        Relation::new(vars, a.product(&b))
    }

    /// Elementwise sum after aligning to the union of variable names
    /// — used to combine the two branches of a conditional (§4.7).
    pub fn sum(&self, other: &Relation) -> Relation {
        let (vars, a, b) = self.align(other);
        Relation::new(vars, a.sum(&b))
    }
}

/// The disjunction of relations produced by a conditional's two
/// branches (or, nested, by several). Reduced to a single [`Relation`]
/// by [`RelationList::sum`].
#[derive(Debug, Clone, Default)]
pub struct RelationList {
    relations: Vec<Relation>,
}

impl RelationList {
    pub fn new(relations: Vec<Relation>) -> Self {
        RelationList { relations }
    }

    pub fn single(relation: Relation) -> Self {
        RelationList { relations: vec![relation] }
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Composes every member with `other` (§4.5).
    pub fn compose(&self, other: &Relation) -> RelationList {
        RelationList::new(self.relations.iter().map(|r| r.compose(other)).collect())
    }

    /// Aggregates all members by elementwise sum, homogenizing to
    /// the widest variable set encountered (§4.5). Panics on an
    /// empty list — callers always build a `RelationList` from at
    /// least one branch.
    pub fn sum(&self) -> Relation {
        let mut iter = self.relations.iter();
        let first = iter.next().expect("RelationList must contain at least one relation").clone();
        iter.fold(first, |acc, r| acc.sum(r))
    }
}
