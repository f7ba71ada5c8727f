//! Schema validation and strict parsing of serialized captures.
//!
//! Two entry points with different failure policies:
//! - [`validate_capture`] walks a raw `serde_json::Value` and *returns* a
//!   list of path-qualified issues. It never fails, never recurses past the
//!   resource limits, and stops collecting once more than 100 issues exist.
//! - [`parse_capture`] is the strict boundary: parse, validate, then classify
//!   any issues into the most specific failure code
//!   (version > limit > general) before decoding into the typed model.
//!
//! The raw-value walk exists because serde alone cannot produce the issue
//! list consumers need: a capture with six problems should report six paths,
//! not fail on the first. Typed decoding only runs on values the walk has
//! already cleared, so a decode failure at that point is an internal error,
//! not a user-facing validation message.

mod envelope;
mod issues;
mod parse;
mod validator;

pub use envelope::{ErrorCode, ErrorEnvelope, format_error};
pub use issues::{Issue, ValidateLimits};
pub use parse::{ParseError, parse_capture};
pub use validator::validate_capture;
