//! Issue records and resource limits.

use serde::Serialize;
use serde_json::Value;

/// One problem found by the validator.
///
/// `path` is a dotted JSONPath-like trail (`root.children[2].bbox[1]`);
/// `received` is the compact JSON rendering of the offending value (so a
/// string version `"99.0"` reports as `"\"99.0\""`), or `"missing"` for an
/// absent required field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: String,
    pub expected: String,
    pub received: String,
    pub message: String,
}

/// Ceilings on what the validator will walk.
///
/// These are parse-time protections, distinct from the smaller capture-time
/// hints in `core-grammar` that advise producers. `max_string_length` is
/// reserved and currently unenforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidateLimits {
    pub max_nodes: usize,
    pub max_depth: usize,
    pub max_string_length: usize,
}

impl Default for ValidateLimits {
    fn default() -> Self {
        Self {
            max_nodes: 10_000,
            max_depth: 50,
            max_string_length: 10_000,
        }
    }
}

const MAX_RECEIVED_CHARS: usize = 120;

/// Compact rendering of a received value for issue records, truncated so a
/// pathological input cannot balloon the report.
pub(crate) fn received_repr(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= MAX_RECEIVED_CHARS {
        return rendered;
    }
    let mut out: String = rendered.chars().take(MAX_RECEIVED_CHARS).collect();
    out.push('…');
    out
}

pub(crate) const RECEIVED_MISSING: &str = "missing";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn received_repr_is_compact_json() {
        assert_eq!(received_repr(&json!("99.0")), "\"99.0\"");
        assert_eq!(received_repr(&json!(42)), "42");
        assert_eq!(received_repr(&json!(null)), "null");
        assert_eq!(received_repr(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn received_repr_truncates_large_values() {
        let big = json!("x".repeat(500));
        let repr = received_repr(&big);
        assert!(repr.chars().count() <= MAX_RECEIVED_CHARS + 1);
        assert!(repr.ends_with('…'));
    }

    #[test]
    fn default_limits() {
        let limits = ValidateLimits::default();
        assert_eq!(limits.max_nodes, 10_000);
        assert_eq!(limits.max_depth, 50);
    }
}
