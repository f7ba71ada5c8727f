//! WebSketch IR: a compact, viewport-normalized intermediate representation
//! of web UI, with the three operations that make it useful to downstream
//! tools.
//!
//! - **Fingerprinting** — [`fingerprint_capture`] / [`fingerprint_layout`]
//!   produce stable 8-hex digests that answer "is this page the same?",
//!   canonicalized against sibling reordering and sub-pixel jitter.
//! - **Diffing** — [`diff`] matches nodes between two captures greedily by a
//!   weighted similarity score and reports an explainable list of
//!   added/removed/moved/resized/text/structural changes.
//! - **Validation & parsing** — [`validate_capture`] collects path-qualified
//!   issues without ever failing; [`parse_capture`] is the strict boundary
//!   that classifies problems into stable `WS_*` codes.
//!
//! An ASCII renderer ([`render_ascii`]) is included for human inspection.
//!
//! The library is pure and synchronous: inputs are captures or their
//! serialized text, outputs are values, and nothing here touches the network,
//! the filesystem, or a thread pool. The one mutating operation is
//! [`assign_node_ids`], which writes content-addressed IDs into the tree it
//! is given.

pub use core_grammar::{
    BBOX_QUANT_STEP, BBox01, COLLAPSE_TOLERANCE, COMPILER_NAME, CURRENT_SCHEMA_VERSION, Capture,
    CompilerInfo, MAX_CHILDREN, MAX_DEPTH, Node, NodeFlags, Role, SUPPORTED_SCHEMA_VERSIONS,
    TextKind, TextSig, VALID_ROLES, Viewport, is_supported_schema_version,
};

pub use core_text::{
    classify_text, hash32, hash_hex, normalize, sha256_hex, text_sig, text_sig_sha256,
};

pub use core_hash::{
    HashOptions, assign_node_ids, bbox_similarity, bbox_string, fingerprint_capture,
    fingerprint_layout, generate_node_id, hash_node_deep, hash_node_shallow, node_similarity,
    quantize,
};

pub use core_validate::{
    ErrorCode, ErrorEnvelope, Issue, ParseError, ValidateLimits, format_error, parse_capture,
    validate_capture,
};

pub use core_diff::{
    Change, ChangeCounts, ChangeKind, ChangeNode, DiffMetadata, DiffOptions, DiffResult,
    DiffSummary, FlatNode, diff, flatten,
};

pub use core_render::{RenderOptions, render_ascii};
