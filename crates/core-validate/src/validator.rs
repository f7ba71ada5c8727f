//! The hand-rolled schema walk.

use core_grammar::{SUPPORTED_SCHEMA_VERSIONS, VALID_ROLES, is_supported_schema_version};
use serde_json::Value;

use crate::issues::{Issue, RECEIVED_MISSING, ValidateLimits, received_repr};

/// Collection stops entirely once the issue count exceeds this; a deeply
/// broken capture reports its first hundred problems, not all of them.
const MAX_ISSUES: usize = 100;

pub(crate) const MSG_NODE_LIMIT: &str = "node count exceeds maxNodes";
pub(crate) const MSG_DEPTH_LIMIT: &str = "depth exceeds maxDepth";

/// Validate an already-parsed JSON value as a capture. Never fails; returns
/// the accumulated issues (empty means valid).
pub fn validate_capture(value: &Value, limits: &ValidateLimits) -> Vec<Issue> {
    let mut walk = Walk {
        limits,
        issues: Vec::new(),
        node_count: 0,
    };
    walk.check_capture(value);
    tracing::debug!(
        target: "websketch.validate",
        issues = walk.issues.len(),
        nodes = walk.node_count,
        "capture validated"
    );
    walk.issues
}

struct Walk<'a> {
    limits: &'a ValidateLimits,
    issues: Vec<Issue>,
    node_count: usize,
}

impl Walk<'_> {
    fn saturated(&self) -> bool {
        self.issues.len() > MAX_ISSUES
    }

    fn push(&mut self, path: impl Into<String>, expected: impl Into<String>, received: String, message: impl Into<String>) {
        if self.saturated() {
            return;
        }
        self.issues.push(Issue {
            path: path.into(),
            expected: expected.into(),
            received,
            message: message.into(),
        });
    }

    fn push_value(&mut self, path: impl Into<String>, expected: impl Into<String>, value: Option<&Value>, message: impl Into<String>) {
        let received = value.map_or_else(|| RECEIVED_MISSING.to_string(), received_repr);
        self.push(path, expected, received, message);
    }

    fn require_string(&mut self, obj: &serde_json::Map<String, Value>, field: &str, path: &str) {
        match obj.get(field) {
            Some(Value::String(_)) => {}
            other => self.push_value(path, "string", other, format!("{field} must be a string")),
        }
    }

    fn require_number(&mut self, obj: &serde_json::Map<String, Value>, field: &str, path: &str) {
        match obj.get(field) {
            Some(v) if v.is_number() => {}
            other => self.push_value(path, "number", other, format!("{field} must be a number")),
        }
    }

    fn check_capture(&mut self, value: &Value) {
        let Some(obj) = value.as_object() else {
            self.push_value("", "object", Some(value), "capture must be a JSON object");
            return;
        };

        match obj.get("version") {
            Some(Value::String(v)) if is_supported_schema_version(v) => {}
            other => self.push_value(
                "version",
                format!("one of {SUPPORTED_SCHEMA_VERSIONS:?}"),
                other,
                "unsupported schema version",
            ),
        }

        self.require_string(obj, "url", "url");
        self.require_number(obj, "timestamp_ms", "timestamp_ms");

        match obj.get("viewport") {
            Some(Value::Object(vp)) => {
                for field in ["w_px", "h_px", "aspect"] {
                    self.require_number(vp, field, &format!("viewport.{field}"));
                }
            }
            other => self.push_value("viewport", "object", other, "viewport must be an object"),
        }

        match obj.get("compiler") {
            Some(Value::Object(comp)) => {
                for field in ["name", "version", "options_hash"] {
                    self.require_string(comp, field, &format!("compiler.{field}"));
                }
            }
            other => self.push_value("compiler", "object", other, "compiler must be an object"),
        }

        match obj.get("root") {
            Some(root) => self.check_node(root, "root", 1),
            None => self.push_value("root", "object", None, "root node is required"),
        }
    }

    fn check_node(&mut self, value: &Value, path: &str, depth: usize) {
        if self.saturated() {
            return;
        }

        self.node_count += 1;
        if self.node_count > self.limits.max_nodes {
            // Report once per offending node, but do not descend further.
            self.push(
                path,
                format!("at most {} nodes", self.limits.max_nodes),
                self.node_count.to_string(),
                format!("{MSG_NODE_LIMIT} ({})", self.limits.max_nodes),
            );
            return;
        }
        if depth > self.limits.max_depth {
            self.push(
                path,
                format!("depth at most {}", self.limits.max_depth),
                depth.to_string(),
                format!("{MSG_DEPTH_LIMIT} ({})", self.limits.max_depth),
            );
            return;
        }

        let Some(obj) = value.as_object() else {
            self.push_value(path, "object", Some(value), "node must be a JSON object");
            return;
        };

        match obj.get("role") {
            Some(Value::String(tag)) if VALID_ROLES.contains(&tag.as_str()) => {}
            other => self.push_value(
                format!("{path}.role"),
                "valid role tag",
                other,
                "role must be a member of the closed vocabulary",
            ),
        }

        match obj.get("bbox") {
            Some(Value::Array(items)) => {
                if items.len() != 4 {
                    self.push_value(
                        format!("{path}.bbox"),
                        "array of exactly 4 numbers",
                        obj.get("bbox"),
                        "bbox must have exactly 4 elements",
                    );
                } else {
                    for (i, item) in items.iter().enumerate() {
                        if !item.is_number() {
                            self.push_value(
                                format!("{path}.bbox[{i}]"),
                                "number",
                                Some(item),
                                "bbox element must be a number",
                            );
                        }
                    }
                }
            }
            other => self.push_value(
                format!("{path}.bbox"),
                "array of exactly 4 numbers",
                other,
                "bbox must be an array",
            ),
        }

        for field in ["interactive", "visible"] {
            match obj.get(field) {
                Some(Value::Bool(_)) => {}
                other => self.push_value(
                    format!("{path}.{field}"),
                    "boolean",
                    other,
                    format!("{field} must be a boolean"),
                ),
            }
        }

        self.require_string(obj, "id", &format!("{path}.id"));

        if let Some(text) = obj.get("text") {
            match text.as_object() {
                Some(sig) => self.require_string(sig, "kind", &format!("{path}.text.kind")),
                None => self.push_value(
                    format!("{path}.text"),
                    "object",
                    Some(text),
                    "text must be an object",
                ),
            }
        }

        if let Some(children) = obj.get("children") {
            match children.as_array() {
                Some(items) => {
                    for (i, child) in items.iter().enumerate() {
                        self.check_node(child, &format!("{path}.children[{i}]"), depth + 1);
                    }
                }
                None => self.push_value(
                    format!("{path}.children"),
                    "array",
                    Some(children),
                    "children must be an array",
                ),
            }
        }
    }
}
