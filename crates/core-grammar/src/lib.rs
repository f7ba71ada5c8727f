//! WebSketch IR grammar: the data model and nothing else.
//!
//! Contract:
//! - Types here describe the shape of a capture (role vocabulary, bounding
//!   boxes, text signals, nodes, the capture envelope) and carry no behavior
//!   beyond accessors. Hashing, validation, diffing, and rendering live in
//!   their own crates and consume these types.
//! - Every type (de)serializes with serde; optional fields are `Option` and
//!   are omitted from output when absent, so a serialized capture round-trips
//!   structurally.
//! - Unknown JSON keys are tolerated at every level for forward
//!   compatibility. The closed parts of the grammar (role tags, text kinds)
//!   reject unknown strings at the serde boundary; the raw-value validator in
//!   `core-validate` reports the same conditions with paths.

mod bbox;
mod capture;
mod node;
mod role;

pub use bbox::BBox01;
pub use capture::{Capture, CompilerInfo, Viewport};
pub use node::{Node, NodeFlags, TextKind, TextSig};
pub use role::{Role, VALID_ROLES};

/// Grid applied to bounding-box components before hashing and ordering.
pub const BBOX_QUANT_STEP: f64 = 0.001;

/// Capture-time tolerance for collapsing near-identical sibling geometry.
pub const COLLAPSE_TOLERANCE: f64 = 0.002;

/// Capture-time depth hint for capture tools. The validator's `max_depth`
/// (default 50) is the authoritative ceiling on what can be parsed; this
/// constant only advises producers.
pub const MAX_DEPTH: usize = 8;

/// Capture-time hint for the maximum children a producer should emit.
pub const MAX_CHILDREN: usize = 200;

/// Well-known `compiler.name` emitted by the capture toolchain.
pub const COMPILER_NAME: &str = "websketch-ir";

/// Schema version written by this implementation.
pub const CURRENT_SCHEMA_VERSION: &str = "0.1";

/// Schema versions this implementation can parse. Patch bumps are additive;
/// minor bumps may add required fields with defaults; major bumps break.
pub const SUPPORTED_SCHEMA_VERSIONS: &[&str] = &["0.1"];

/// True exactly when `version` is a member of [`SUPPORTED_SCHEMA_VERSIONS`].
pub fn is_supported_schema_version(version: &str) -> bool {
    SUPPORTED_SCHEMA_VERSIONS.contains(&version)
}
