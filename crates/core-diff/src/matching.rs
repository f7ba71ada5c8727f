//! Candidate generation and greedy assignment.

use std::cmp::Ordering;

use core_hash::{bbox_similarity, node_similarity};

use crate::{DiffOptions, FlatNode};

/// Different-role pairs below this overlap are never even scored. Same-role
/// pairs are scored at any overlap; the asymmetry is intentional, since a
/// role match alone is strong evidence the pair is worth considering.
const ROLE_MISMATCH_IOU_FLOOR: f64 = 0.3;

pub(crate) struct Matching {
    /// Accepted pairs `(a_index, b_index, similarity)` in acceptance order.
    pub pairs: Vec<(usize, usize, f64)>,
    /// Per A-node assignment into B, `None` when removed.
    pub matched_a: Vec<Option<usize>>,
    /// Per B-node assignment into A, `None` when added.
    pub matched_b: Vec<Option<usize>>,
}

/// Score all plausible cross pairs, then walk them from the highest
/// similarity down, accepting a pair whenever both sides are still free.
pub(crate) fn match_nodes(a: &[FlatNode], b: &[FlatNode], opts: &DiffOptions) -> Matching {
    let mut candidates: Vec<(usize, usize, f64)> = Vec::new();
    for (i, fa) in a.iter().enumerate() {
        for (j, fb) in b.iter().enumerate() {
            if fa.node.role != fb.node.role
                && bbox_similarity(&fa.node.bbox, &fb.node.bbox) < ROLE_MISMATCH_IOU_FLOOR
            {
                continue;
            }
            let similarity = node_similarity(fa.node, fb.node);
            if similarity >= opts.match_threshold {
                candidates.push((i, j, similarity));
            }
        }
    }

    // Stable sort: equal scores keep generation order, so ties resolve
    // deterministically without being meaningful.
    candidates.sort_by(|x, y| y.2.partial_cmp(&x.2).unwrap_or(Ordering::Equal));
    tracing::trace!(
        target: "websketch.diff",
        candidates = candidates.len(),
        "candidate pairs scored"
    );

    let mut matched_a: Vec<Option<usize>> = vec![None; a.len()];
    let mut matched_b: Vec<Option<usize>> = vec![None; b.len()];
    let mut pairs = Vec::new();
    for (i, j, similarity) in candidates {
        if matched_a[i].is_none() && matched_b[j].is_none() {
            matched_a[i] = Some(j);
            matched_b[j] = Some(i);
            pairs.push((i, j, similarity));
        }
    }

    Matching {
        pairs,
        matched_a,
        matched_b,
    }
}
