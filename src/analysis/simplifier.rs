//! The choice simplifier (§4.8): turns the set of delta sequences
//! that force an `infinity` coefficient somewhere in the result
//! matrix into a compact disjunction of choice vectors describing
//! every combination of choices that avoids all of them.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::algebra::Delta;
use crate::result::ChoiceVector;

const DOMAIN: [u8; 3] = [0, 1, 2];

/// Simplifies the failure-sequence set to a fixed point (§4.8 Stage
/// 1), applying the subsumption rule (b) and the domain-collapse
/// rule (a) until neither changes anything.
fn simplify_failure_sequences(mut sequences: Vec<Vec<Delta>>) -> Vec<Vec<Delta>> {
    // Each round strictly shrinks the total delta count or the
    // sequence count, so this always terminates well before the cap;
    // the cap only guards against a logic error reintroducing a cycle.
    for _ in 0..10_000 {
        let collapsed = collapse_full_domain(&sequences);
        let deduped = drop_subsumed(collapsed);
        if deduped == sequences {
            return deduped;
        }
        sequences = deduped;
    }
    sequences
}

/// Rule (a): if, for some index `j`, every sequence agreeing
/// elsewhere differs only in the value held at `j`, and those values
/// together cover the whole domain, the choice at `j` cannot help —
/// replace the group with its common remainder.
fn collapse_full_domain(sequences: &[Vec<Delta>]) -> Vec<Vec<Delta>> {
    for j_candidate in all_indices(sequences) {
        let mut groups: Vec<(Vec<Delta>, Vec<u8>, Vec<usize>)> = Vec::new();
        for (pos, seq) in sequences.iter().enumerate() {
            let Some(here) = seq.iter().find(|d| d.index == j_candidate) else { continue };
            let remainder: Vec<Delta> = seq.iter().copied().filter(|d| d.index != j_candidate).collect();
            if let Some(group) = groups.iter_mut().find(|(r, _, _)| *r == remainder) {
                group.1.push(here.value);
                group.2.push(pos);
            } else {
                groups.push((remainder, vec![here.value], vec![pos]));
            }
        }
        for (remainder, values, positions) in &groups {
            let covers_domain: BTreeSet<u8> = values.iter().copied().collect();
            if covers_domain.len() == DOMAIN.len() {
                let mut out: Vec<Vec<Delta>> = sequences
                    .iter()
                    .enumerate()
                    .filter(|(pos, _)| !positions.contains(pos))
                    .map(|(_, s)| s.clone())
                    .collect();
                out.push(remainder.clone());
                return out;
            }
        }
    }
    sequences.to_vec()
}

fn all_indices(sequences: &[Vec<Delta>]) -> BTreeSet<usize> {
    sequences.iter().flat_map(|s| s.iter().map(|d| d.index)).collect()
}

/// Rule (b): a sequence that is a (multiset-)subset of another
/// renders the superset redundant — any derivation failing the
/// subset already fails the superset.
fn drop_subsumed(sequences: Vec<Vec<Delta>>) -> Vec<Vec<Delta>> {
    let as_sets: Vec<BTreeSet<Delta>> = sequences.iter().map(|s| s.iter().copied().collect()).collect();
    let mut keep = vec![true; sequences.len()];
    for i in 0..sequences.len() {
        if !keep[i] {
            continue;
        }
        for j in 0..sequences.len() {
            if i == j || !keep[j] {
                continue;
            }
            if as_sets[i].is_subset(&as_sets[j]) && as_sets[i] != as_sets[j] {
                keep[j] = false;
            } else if as_sets[i] == as_sets[j] && i < j {
                keep[j] = false;
            }
        }
    }
    sequences.into_iter().zip(keep).filter(|(_, k)| *k).map(|(s, _)| s).collect()
}

fn full_vector(index: usize) -> ChoiceVector {
    (0..index).map(|_| DOMAIN.iter().copied().collect()).collect()
}

/// §4.8 Stage 2: the Cartesian product of the (simplified)
/// failure-sequence set. Each combination picks one delta per
/// failure sequence to exclude; a combination that empties any
/// position is discarded, and the remaining vectors are reduced to
/// an antichain under componentwise subset.
fn build_vectors(index: usize, sequences: &[Vec<Delta>]) -> Vec<ChoiceVector> {
    if index == 0 {
        // §4.8: "index = 0 -> empty vector list by convention."
        return Vec::new();
    }
    if sequences.is_empty() {
        return vec![full_vector(index)];
    }
    if sequences.iter().any(|s| s.is_empty()) {
        // An unconditional failure (no delta guards it) cannot be
        // avoided by any choice.
        return Vec::new();
    }

    let combinations = sequences
        .iter()
        .map(|sequence| sequence.iter().copied())
        .multi_cartesian_product();

    let mut vectors = Vec::new();
    'combo: for combo in combinations {
        let mut vector = full_vector(index);
        for delta in &combo {
            vector[delta.index].remove(&delta.value);
            if vector[delta.index].is_empty() {
                continue 'combo;
            }
        }
        vectors.push(vector);
    }

    drop_dominated(vectors)
}

/// Keeps only the maximal vectors under componentwise subset: if `a`
/// is a subset of `b` at every position, `a`'s solutions are already
/// covered by `b`'s, so `a` is discarded (§8 "no output vector is
/// componentwise-subset of another").
fn drop_dominated(vectors: Vec<ChoiceVector>) -> Vec<ChoiceVector> {
    let mut keep = vec![true; vectors.len()];
    for i in 0..vectors.len() {
        if !keep[i] {
            continue;
        }
        for j in 0..vectors.len() {
            if i == j || !keep[j] {
                continue;
            }
            if is_subset_vector(&vectors[i], &vectors[j]) && vectors[i] != vectors[j] {
                keep[i] = false;
                break;
            } else if vectors[i] == vectors[j] && i > j {
                keep[i] = false;
                break;
            }
        }
    }
    vectors.into_iter().zip(keep).filter(|(_, k)| *k).map(|(v, _)| v).collect()
}

fn is_subset_vector(a: &ChoiceVector, b: &ChoiceVector) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.is_subset(y))
}

/// Runs both stages of §4.8 and returns the resulting disjunction.
/// An empty return value (with `index > 0`) means *infinite*: no
/// derivation avoids every failure.
pub fn simplify(index: usize, failure_sequences: Vec<Vec<Delta>>) -> Vec<ChoiceVector> {
    let simplified = simplify_failure_sequences(failure_sequences);
    build_vectors(index, &simplified)
}
