//! Capture-level fingerprints.

use core_grammar::Capture;
use core_text::hash_hex;

use crate::{HashOptions, node::hash_node_deep};

fn fingerprint_with(cap: &Capture, opts: &HashOptions) -> String {
    // The aspect ratio is folded in at two decimals so minor viewport-size
    // noise does not perturb the digest. `url`, `timestamp_ms`, and
    // `compiler` never enter it.
    let rec = format!(
        "{}|a:{:.2}",
        hash_node_deep(&cap.root, opts),
        cap.viewport.aspect
    );
    hash_hex(&rec)
}

/// Structure + content digest of a capture: the deep hash of the root (text
/// and name hashes included) combined with the rounded viewport aspect.
pub fn fingerprint_capture(cap: &Capture) -> String {
    fingerprint_with(cap, &HashOptions::default())
}

/// Layout-only digest: identical to [`fingerprint_capture`] but with text and
/// name hashes excluded, so copy edits leave it unchanged.
pub fn fingerprint_layout(cap: &Capture) -> String {
    fingerprint_with(cap, &HashOptions::layout())
}
