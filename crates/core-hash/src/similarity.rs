//! Weighted pairwise node similarity, the score the diff matcher ranks by.

use core_grammar::Node;

use crate::bbox::bbox_similarity;

fn text_hash(node: &Node) -> Option<&str> {
    node.text.as_ref().and_then(|t| t.hash.as_deref())
}

/// Score in `[0, 1]`: accumulated points over accumulated weight.
///
/// Role (3), bbox IoU (2, proportional), and interactivity (1) always
/// contribute weight. `semantic` contributes weight 2 whenever either side
/// carries one, but points only when both carry the same value; a one-sided
/// tag therefore depresses the ratio, which is what keeps spurious matches
/// against annotated nodes below the threshold. Text hashes weigh in (1)
/// only when both sides have one.
pub fn node_similarity(a: &Node, b: &Node) -> f64 {
    let mut score = 0.0;
    let mut weight = 0.0;

    weight += 3.0;
    if a.role == b.role {
        score += 3.0;
    }

    weight += 2.0;
    score += 2.0 * bbox_similarity(&a.bbox, &b.bbox);

    weight += 1.0;
    if a.interactive == b.interactive {
        score += 1.0;
    }

    if a.semantic.is_some() || b.semantic.is_some() {
        weight += 2.0;
        if a.semantic.is_some() && a.semantic == b.semantic {
            score += 2.0;
        }
    }

    if let (Some(ta), Some(tb)) = (text_hash(a), text_hash(b)) {
        weight += 1.0;
        if ta == tb {
            score += 1.0;
        }
    }

    score / weight
}
