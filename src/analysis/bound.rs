//! The bound extractor (§4.9): turns a non-infinite matrix and a
//! witness choice vector into the symbolic mwp-bound string for each
//! output variable.

use std::collections::BTreeSet;

use crate::algebra::{Delta, Scalar};
use crate::matrix::{Matrix, Relation};
use crate::result::ChoiceVector;

fn delta_key(deltas: &[Delta]) -> Vec<(usize, u8)> {
    deltas.iter().map(|d| (d.index, d.value)).collect()
}

/// The classified dependencies of one target variable: `m`/`w`-class
/// sources go in `max_vars` (§4.9: "max(x_list, poly1_vars)"),
/// `p`-class sources in `poly_groups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBound {
    pub variable: String,
    pub max_vars: Vec<String>,
    /// `p`-class sources, grouped into multiplicative terms. Two
    /// sources land in the same group exactly when their surviving
    /// monomial shares the same non-empty delta sequence under the
    /// witness — evidence they were produced by the same conditional
    /// derivation rather than two independent additive contributions
    /// (§4.1: `w*w=p` is how a product arises in this algebra in the
    /// first place). A source whose surviving monomial carries no
    /// delta at all is never grouped with another: unconditional `p`
    /// contributions from distinct rows aren't known to be related.
    pub poly_groups: Vec<Vec<String>>,
}

impl VariableBound {
    /// §4.9 simplification rules: elide empty slots, drop `max(..)`
    /// when it would wrap a single variable, collapse `max(x, x)`.
    /// Each poly group renders `*`-joined; groups are summed.
    pub fn render(&self) -> String {
        let max_part = match self.max_vars.len() {
            0 => None,
            1 => Some(self.max_vars[0].clone()),
            _ => Some(format!("max({})", self.max_vars.join(","))),
        };
        let poly_part = if self.poly_groups.is_empty() {
            None
        } else {
            Some(
                self.poly_groups
                    .iter()
                    .map(|group| group.join("*"))
                    .collect::<Vec<_>>()
                    .join("+"),
            )
        };

        match (max_part, poly_part) {
            (Some(m), Some(p)) => format!("{m}+{p}"),
            (Some(m), None) => m,
            (None, Some(p)) => p,
            (None, None) => "0".to_string(),
        }
    }
}

/// Picks one concrete value per choice index out of the allowed
/// subsets a [`ChoiceVector`] carries. Since the simplifier already
/// guarantees every value within a position's set is individually
/// safe, any deterministic pick is a valid witness; this crate picks
/// the smallest value at each index so that repeated runs over the
/// same result are reproducible (documented as an Open Question
/// resolution in DESIGN.md).
pub fn canonical_witness(vector: &ChoiceVector) -> Vec<u8> {
    vector
        .iter()
        .map(|set| *set.iter().min().expect("choice simplifier never emits an empty position"))
        .collect()
}

/// Extracts the bound for every variable in `relation`, given a
/// non-infinite matrix and a witness choice vector. Panics if the
/// matrix still contains an `infinity` coefficient reachable under
/// the witness — that would mean the witness was not actually valid,
/// an internal-invariant violation the simplifier is responsible for
/// preventing.
pub fn extract(relation_vars: &[String], matrix: &Matrix, witness: &[u8]) -> Vec<VariableBound> {
    let mut bounds = Vec::with_capacity(relation_vars.len());
    for (col, target) in relation_vars.iter().enumerate() {
        let mut max_vars: Vec<String> = Vec::new();
        // Keyed by delta sequence; `None` entries (unconditional `p`
        // contributions) each get their own singleton group.
        let mut poly_groups: Vec<(Option<Vec<(usize, u8)>>, Vec<String>)> = Vec::new();

        for (row, source) in relation_vars.iter().enumerate() {
            let cell = matrix.get(row, col);
            let scalar = cell.eval(witness);
            match scalar {
                Scalar::Zero => {}
                Scalar::M | Scalar::W => max_vars.push(source.clone()),
                Scalar::P => {
                    let deltas = cell.witness_deltas(witness);
                    if deltas.is_empty() {
                        poly_groups.push((None, vec![source.clone()]));
                    } else {
                        let key = delta_key(&deltas);
                        match poly_groups.iter_mut().find(|(k, _)| k.as_ref() == Some(&key)) {
                            Some((_, group)) => group.push(source.clone()),
                            None => poly_groups.push((Some(key), vec![source.clone()])),
                        }
                    }
                }
                Scalar::Infinite => panic!(
                    "bound extraction reached an infinity coefficient for {source} -> {target} under a witness the simplifier certified as safe"
                ),
            }
        }

        let poly_groups = poly_groups.into_iter().map(|(_, group)| group).collect();
        bounds.push(VariableBound { variable: target.clone(), max_vars, poly_groups });
    }
    bounds
}

/// Joins every output variable's rendered bound with the
/// conjunction the design calls for (§4.9: "the conjunction over all
/// output variables is the program's bound").
pub fn render_function_bound(bounds: &[VariableBound], outputs: &[String]) -> String {
    bounds
        .iter()
        .filter(|b| outputs.contains(&b.variable))
        .map(|b| format!("{}\u{2032} \u{2264} {}", b.variable, b.render()))
        .collect::<Vec<_>>()
        .join(" \u{2227} ")
}

pub fn extract_for_relation(relation: &Relation, witness: &[u8]) -> Vec<VariableBound> {
    extract(relation.vars(), relation.matrix(), witness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Delta, Monomial, Polynomial};

    #[test]
    fn m_and_w_land_in_max_p_lands_outside() {
        let vars = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let mut matrix = Matrix::identity(3);
        matrix.set(0, 2, Polynomial::constant(Scalar::M));
        matrix.set(1, 2, Polynomial::constant(Scalar::P));
        let bounds = extract(&vars, &matrix, &[]);

        let z_bound = bounds.iter().find(|b| b.variable == "z").unwrap();
        assert_eq!(z_bound.max_vars, vec!["x".to_string(), "z".to_string()]);
        assert_eq!(z_bound.poly_groups, vec![vec!["y".to_string()]]);
        assert_eq!(z_bound.render(), "max(x,z)+y");
    }

    #[test]
    fn single_max_var_is_not_wrapped() {
        let bound = VariableBound {
            variable: "x".to_string(),
            max_vars: vec!["y".to_string()],
            poly_groups: vec![],
        };
        assert_eq!(bound.render(), "y");
    }

    #[test]
    fn only_poly_vars_prints_without_max() {
        let bound = VariableBound {
            variable: "x".to_string(),
            max_vars: vec![],
            poly_groups: vec![vec!["a".to_string()], vec!["b".to_string()]],
        };
        assert_eq!(bound.render(), "a+b");
    }

    #[test]
    fn shared_delta_sequence_renders_as_a_product_term() {
        let bound = VariableBound {
            variable: "x".to_string(),
            max_vars: vec![],
            poly_groups: vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]],
        };
        assert_eq!(bound.render(), "a*b+c");
    }

    #[test]
    fn no_dependencies_renders_zero() {
        let bound = VariableBound { variable: "x".to_string(), max_vars: vec![], poly_groups: vec![] };
        assert_eq!(bound.render(), "0");
    }

    #[test]
    fn canonical_witness_picks_smallest_allowed_value() {
        let vector: ChoiceVector = vec![BTreeSet::from([1, 2]), BTreeSet::from([0, 1, 2])];
        assert_eq!(canonical_witness(&vector), vec![1, 0]);
    }

    #[test]
    fn eval_only_counts_monomials_the_witness_satisfies() {
        let vars = vec!["x".to_string(), "y".to_string()];
        let mut matrix = Matrix::identity(2);
        matrix.set(
            0,
            1,
            Polynomial::new(vec![
                Monomial::new(Scalar::M, vec![Delta::new(0, 0)]),
                Monomial::new(Scalar::P, vec![Delta::new(1, 0)]),
            ]),
        );
        let bounds_choice_0 = extract(&vars, &matrix, &[0]);
        let bounds_choice_1 = extract(&vars, &matrix, &[1]);

        let y0 = bounds_choice_0.iter().find(|b| b.variable == "y").unwrap();
        assert_eq!(y0.max_vars, vec!["x".to_string()]);
        assert!(y0.poly_groups.is_empty());

        let y1 = bounds_choice_1.iter().find(|b| b.variable == "y").unwrap();
        assert!(y1.max_vars.is_empty());
        assert_eq!(y1.poly_groups, vec![vec!["x".to_string()]]);
    }

    #[test]
    fn two_sources_sharing_a_delta_sequence_group_into_one_product() {
        let vars = vec!["a".to_string(), "b".to_string(), "x".to_string()];
        let mut matrix = Matrix::identity(3);
        matrix.set(0, 2, Polynomial::new(vec![Monomial::new(Scalar::P, vec![Delta::new(1, 0)])]));
        matrix.set(1, 2, Polynomial::new(vec![Monomial::new(Scalar::P, vec![Delta::new(1, 0)])]));

        let bounds = extract(&vars, &matrix, &[1]);
        let x_bound = bounds.iter().find(|b| b.variable == "x").unwrap();
        assert_eq!(x_bound.poly_groups, vec![vec!["a".to_string(), "b".to_string()]]);
        assert_eq!(x_bound.render(), "a*b");
    }

    #[test]
    fn two_unconditional_poly_sources_are_not_grouped_together() {
        let vars = vec!["a".to_string(), "b".to_string(), "x".to_string()];
        let mut matrix = Matrix::identity(3);
        matrix.set(0, 2, Polynomial::constant(Scalar::P));
        matrix.set(1, 2, Polynomial::constant(Scalar::P));

        let bounds = extract(&vars, &matrix, &[]);
        let x_bound = bounds.iter().find(|b| b.variable == "x").unwrap();
        assert_eq!(x_bound.poly_groups, vec![vec!["a".to_string()], vec!["b".to_string()]]);
        assert_eq!(x_bound.render(), "a+b");
    }
}
