//! Change records, classification, and ranking.

use core_grammar::{BBox01, Node, Role};
use serde::Serialize;

use crate::matching::Matching;
use crate::{DiffOptions, FlatNode};

/// What happened to a node (or pair of nodes) between two captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Moved,
    Resized,
    TextChanged,
    InteractiveChanged,
    RoleChanged,
    ChildrenChanged,
}

/// Snapshot of one side of a change: enough to locate and describe the node
/// without dragging its whole subtree into the result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangeNode {
    pub path: String,
    pub role: Role,
    pub bbox: BBox01,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,
}

impl ChangeNode {
    fn from_flat(flat: &FlatNode) -> Self {
        Self {
            path: flat.path.clone(),
            role: flat.node.role,
            bbox: flat.node.bbox,
            semantic: flat.node.semantic.clone(),
        }
    }
}

/// One classified change. `delta` carries the componentwise bbox delta
/// (`b − a`) for `moved`/`resized`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Change {
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_a: Option<ChangeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_b: Option<ChangeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<[f64; 4]>,
}

impl Change {
    fn pair(kind: ChangeKind, a: &FlatNode, b: &FlatNode) -> Self {
        Self {
            kind,
            node_a: Some(ChangeNode::from_flat(a)),
            node_b: Some(ChangeNode::from_flat(b)),
            delta: None,
        }
    }

    /// Area of the affected node, preferring the A side. Ranking key.
    fn area(&self) -> f64 {
        self.node_a
            .as_ref()
            .or(self.node_b.as_ref())
            .map_or(0.0, |n| n.bbox.area())
    }
}

fn text_hash(node: &Node) -> Option<&str> {
    node.text.as_ref().and_then(|t| t.hash.as_deref())
}

/// Classify every matched pair (A-preorder order), then unmatched A-nodes as
/// removals (A order), then unmatched B-nodes as additions (B order).
pub(crate) fn classify(
    a: &[FlatNode],
    b: &[FlatNode],
    matching: &Matching,
    opts: &DiffOptions,
) -> Vec<Change> {
    let mut changes = Vec::new();

    for (i, slot) in matching.matched_a.iter().enumerate() {
        let Some(j) = *slot else { continue };
        let (fa, fb) = (&a[i], &b[j]);
        let (na, nb) = (fa.node, fb.node);

        let delta = [
            nb.bbox.x() - na.bbox.x(),
            nb.bbox.y() - na.bbox.y(),
            nb.bbox.w() - na.bbox.w(),
            nb.bbox.h() - na.bbox.h(),
        ];
        if delta[0].abs() > opts.move_threshold || delta[1].abs() > opts.move_threshold {
            changes.push(Change {
                delta: Some(delta),
                ..Change::pair(ChangeKind::Moved, fa, fb)
            });
        }
        if delta[2].abs() > opts.resize_threshold || delta[3].abs() > opts.resize_threshold {
            changes.push(Change {
                delta: Some(delta),
                ..Change::pair(ChangeKind::Resized, fa, fb)
            });
        }
        if na.role != nb.role {
            changes.push(Change::pair(ChangeKind::RoleChanged, fa, fb));
        }
        if opts.include_text && text_hash(na) != text_hash(nb) {
            changes.push(Change::pair(ChangeKind::TextChanged, fa, fb));
        }
        if na.interactive != nb.interactive {
            changes.push(Change::pair(ChangeKind::InteractiveChanged, fa, fb));
        }
        if na.children().len() != nb.children().len() {
            changes.push(Change::pair(ChangeKind::ChildrenChanged, fa, fb));
        }
    }

    for (i, slot) in matching.matched_a.iter().enumerate() {
        if slot.is_none() {
            changes.push(Change {
                kind: ChangeKind::Removed,
                node_a: Some(ChangeNode::from_flat(&a[i])),
                node_b: None,
                delta: None,
            });
        }
    }
    for (j, slot) in matching.matched_b.iter().enumerate() {
        if slot.is_none() {
            changes.push(Change {
                kind: ChangeKind::Added,
                node_a: None,
                node_b: Some(ChangeNode::from_flat(&b[j])),
                delta: None,
            });
        }
    }

    changes
}

/// Largest affected area first; equal areas keep detection order.
pub(crate) fn rank(changes: &[Change], limit: usize) -> Vec<Change> {
    let mut ranked: Vec<Change> = changes.to_vec();
    ranked.sort_by(|x, y| {
        y.area()
            .partial_cmp(&x.area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Per-kind tallies for the summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeCounts {
    pub added: usize,
    pub removed: usize,
    pub moved: usize,
    pub resized: usize,
    pub text_changed: usize,
    pub interactive_changed: usize,
    pub role_changed: usize,
    pub children_changed: usize,
}

impl ChangeCounts {
    pub(crate) fn tally(changes: &[Change]) -> Self {
        let mut counts = ChangeCounts::default();
        for change in changes {
            match change.kind {
                ChangeKind::Added => counts.added += 1,
                ChangeKind::Removed => counts.removed += 1,
                ChangeKind::Moved => counts.moved += 1,
                ChangeKind::Resized => counts.resized += 1,
                ChangeKind::TextChanged => counts.text_changed += 1,
                ChangeKind::InteractiveChanged => counts.interactive_changed += 1,
                ChangeKind::RoleChanged => counts.role_changed += 1,
                ChangeKind::ChildrenChanged => counts.children_changed += 1,
            }
        }
        counts
    }

    /// Sum over every kind.
    pub fn total(&self) -> usize {
        self.added
            + self.removed
            + self.moved
            + self.resized
            + self.text_changed
            + self.interactive_changed
            + self.role_changed
            + self.children_changed
    }
}
