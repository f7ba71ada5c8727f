//! Explainable structural diff between two captures.
//!
//! Pipeline: flatten both trees in preorder, score every plausible cross
//! pair, match greedily from the highest similarity down, then classify what
//! changed for each matched pair and report the unmatched remainder as
//! removals and additions. Everything is deterministic: the candidate sort
//! is stable, so equal-similarity ties resolve in generation order
//! (A-preorder major), a tiebreak that is documented but not load-bearing.
//!
//! Greedy matching is deliberate. An optimal assignment (Hungarian) would
//! occasionally pair differently and change the observable output; the cheap
//! scan keeps outputs stable across implementations and inputs large.

mod changes;
mod flatten;
mod matching;

pub use changes::{Change, ChangeCounts, ChangeKind, ChangeNode};
pub use flatten::{FlatNode, flatten};

use core_grammar::Capture;
use core_hash::{fingerprint_capture, fingerprint_layout};
use serde::Serialize;

use crate::matching::match_nodes;

/// Knobs for matching and classification. Defaults: text and name signals
/// on, match threshold 0.5, move/resize thresholds at 1% of the viewport,
/// ten ranked changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffOptions {
    pub include_text: bool,
    pub include_name: bool,
    pub match_threshold: f64,
    pub top_changes_limit: usize,
    pub move_threshold: f64,
    pub resize_threshold: f64,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_text: true,
            include_name: true,
            match_threshold: 0.5,
            top_changes_limit: 10,
            move_threshold: 0.01,
            resize_threshold: 0.01,
        }
    }
}

/// Aggregate verdict over a diff.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffSummary {
    pub counts: ChangeCounts,
    pub identical: bool,
    pub fingerprints_match: bool,
    pub layout_fingerprints_match: bool,
    pub node_count_a: usize,
    pub node_count_b: usize,
}

/// Capture-level context that is not part of the structural comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffMetadata {
    pub url_changed: bool,
    /// Pixel viewport size differs (aspect noise alone does not count).
    pub viewport_changed: bool,
    pub compiler_version_match: bool,
}

/// Full diff output: every change in detection order, the area-ranked top
/// slice, the summary, and capture metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffResult {
    pub changes: Vec<Change>,
    pub top_changes: Vec<Change>,
    pub summary: DiffSummary,
    pub metadata: DiffMetadata,
}

/// Diff two captures. Pure: neither input is mutated, and equal inputs
/// always produce an identical result.
pub fn diff(a: &Capture, b: &Capture, opts: &DiffOptions) -> DiffResult {
    let flat_a = flatten(&a.root, opts);
    let flat_b = flatten(&b.root, opts);

    let matching = match_nodes(&flat_a, &flat_b, opts);
    let changes = changes::classify(&flat_a, &flat_b, &matching, opts);
    let top_changes = changes::rank(&changes, opts.top_changes_limit);
    let counts = ChangeCounts::tally(&changes);

    tracing::debug!(
        target: "websketch.diff",
        nodes_a = flat_a.len(),
        nodes_b = flat_b.len(),
        matched = matching.pairs.len(),
        changes = changes.len(),
        "diff complete"
    );

    DiffResult {
        summary: DiffSummary {
            identical: changes.is_empty(),
            fingerprints_match: fingerprint_capture(a) == fingerprint_capture(b),
            layout_fingerprints_match: fingerprint_layout(a) == fingerprint_layout(b),
            node_count_a: flat_a.len(),
            node_count_b: flat_b.len(),
            counts,
        },
        metadata: DiffMetadata {
            url_changed: a.url != b.url,
            viewport_changed: a.viewport.w_px != b.viewport.w_px
                || a.viewport.h_px != b.viewport.h_px,
            compiler_version_match: a.compiler.version == b.compiler.version,
        },
        changes,
        top_changes,
    }
}
