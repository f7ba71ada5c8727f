//! Node hashing and capture fingerprinting.
//!
//! Everything here is a deterministic function of its input bytes. The deep
//! hash canonicalizes sibling order before digesting, so two captures whose
//! only difference is the input order of siblings fingerprint identically;
//! quantization suppresses sub-pixel jitter below the 0.001 grid. The one
//! mutating operation in the whole system is [`assign_node_ids`], which
//! writes content-addressed IDs into the tree it is handed.

mod bbox;
mod fingerprint;
mod ids;
mod node;
mod similarity;

pub use bbox::{bbox_similarity, bbox_string, quantize};
pub use fingerprint::{fingerprint_capture, fingerprint_layout};
pub use ids::{assign_node_ids, generate_node_id};
pub use node::{hash_node_deep, hash_node_shallow};
pub use similarity::node_similarity;

/// Which optional signals enter the shallow-hash record.
///
/// The full fingerprint uses the default (text and name in, z out); the
/// layout fingerprint clears `include_text` and `include_name` so pure copy
/// changes leave it untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashOptions {
    pub include_text: bool,
    pub include_name: bool,
    pub include_z: bool,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            include_text: true,
            include_name: true,
            include_z: false,
        }
    }
}

impl HashOptions {
    /// Options for the layout-only fingerprint.
    pub const fn layout() -> Self {
        Self {
            include_text: false,
            include_name: false,
            include_z: false,
        }
    }
}
