//! Capture envelope: the root of the serialized form.

use serde::{Deserialize, Serialize};

use crate::Node;

/// Viewport geometry at capture time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub w_px: f64,
    pub h_px: f64,
    pub aspect: f64,
    /// Vertical scroll position normalized to document height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_y01: Option<f64>,
}

/// Identity of the tool that produced the capture. Never enters any
/// fingerprint; diffing only reports whether versions match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompilerInfo {
    pub name: String,
    pub version: String,
    pub options_hash: String,
}

/// Full snapshot of a page as IR.
///
/// `root.role` is conventionally `PAGE` but that is not enforced anywhere.
/// Captures are immutable values; the only in-place mutation in the whole
/// system is content-addressed ID assignment over `root`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    pub version: String,
    pub url: String,
    pub timestamp_ms: f64,
    pub viewport: Viewport,
    pub compiler: CompilerInfo,
    pub root: Node,
}
