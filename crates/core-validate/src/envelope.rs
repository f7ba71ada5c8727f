//! Stable error codes, the presentation envelope, and its formatter.

use serde::Serialize;

use crate::issues::Issue;
use crate::parse::ParseError;

/// User-facing failure codes. The first four are produced by this library;
/// the rest are reserved for calling surfaces (CLI, server) that wrap it, so
/// every layer of a deployment shares one taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "WS_INVALID_JSON")]
    InvalidJson,
    #[serde(rename = "WS_INVALID_CAPTURE")]
    InvalidCapture,
    #[serde(rename = "WS_UNSUPPORTED_VERSION")]
    UnsupportedVersion,
    #[serde(rename = "WS_LIMIT_EXCEEDED")]
    LimitExceeded,
    #[serde(rename = "WS_INVALID_ARGS")]
    InvalidArgs,
    #[serde(rename = "WS_NOT_FOUND")]
    NotFound,
    #[serde(rename = "WS_PERMISSION_DENIED")]
    PermissionDenied,
    #[serde(rename = "WS_IO_ERROR")]
    IoError,
    #[serde(rename = "WS_INTERNAL")]
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "WS_INVALID_JSON",
            ErrorCode::InvalidCapture => "WS_INVALID_CAPTURE",
            ErrorCode::UnsupportedVersion => "WS_UNSUPPORTED_VERSION",
            ErrorCode::LimitExceeded => "WS_LIMIT_EXCEEDED",
            ErrorCode::InvalidArgs => "WS_INVALID_ARGS",
            ErrorCode::NotFound => "WS_NOT_FOUND",
            ErrorCode::PermissionDenied => "WS_PERMISSION_DENIED",
            ErrorCode::IoError => "WS_IO_ERROR",
            ErrorCode::Internal => "WS_INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParseError {
    /// Stable code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::InvalidJson { .. } => ErrorCode::InvalidJson,
            ParseError::UnsupportedVersion { .. } => ErrorCode::UnsupportedVersion,
            ParseError::LimitExceeded { .. } => ErrorCode::LimitExceeded,
            ParseError::InvalidCapture { .. } => ErrorCode::InvalidCapture,
            ParseError::Internal { .. } => ErrorCode::Internal,
        }
    }
}

/// Transport shape for consumers outside the library boundary. Optional
/// fields are omitted when empty; the validation variant carries `issues`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            path: None,
            expected: None,
            received: None,
            hint: None,
            cause: None,
            issues: Vec::new(),
        }
    }
}

impl From<&ParseError> for ErrorEnvelope {
    fn from(err: &ParseError) -> Self {
        let mut env = ErrorEnvelope::new(err.code(), err.to_string());
        match err {
            ParseError::InvalidJson { cause } => {
                env.cause = Some(cause.to_string());
                env.hint = Some("check the producer emitted serialized capture JSON".into());
            }
            ParseError::UnsupportedVersion { received } => {
                env.path = Some("version".into());
                env.expected = Some(format!("one of {:?}", core_grammar::SUPPORTED_SCHEMA_VERSIONS));
                env.received = Some(received.clone());
            }
            ParseError::LimitExceeded { message } => {
                env.details = Some(message.clone());
            }
            ParseError::InvalidCapture { issues } => {
                if let Some(first) = issues.first() {
                    env.path = Some(first.path.clone());
                    env.expected = Some(first.expected.clone());
                    env.received = Some(first.received.clone());
                }
                env.issues = issues.clone();
            }
            ParseError::Internal { message } => {
                env.details = Some(message.clone());
            }
        }
        env
    }
}

const FORMATTED_ISSUE_LIMIT: usize = 5;

/// Render an envelope as `[CODE] message` with indented optional lines.
/// Presentation only; nothing in the core consumes this string.
pub fn format_error(env: &ErrorEnvelope) -> String {
    let mut out = format!("[{}] {}", env.code, env.message);
    if let Some(details) = &env.details {
        out.push_str(&format!("\n  details: {details}"));
    }
    if let Some(path) = &env.path {
        out.push_str(&format!("\n  path: {path}"));
    }
    if let (Some(expected), Some(received)) = (&env.expected, &env.received) {
        out.push_str(&format!("\n  expected: {expected}\n  received: {received}"));
    }
    if let Some(hint) = &env.hint {
        out.push_str(&format!("\n  hint: {hint}"));
    }
    if let Some(cause) = &env.cause {
        out.push_str(&format!("\n  cause: {cause}"));
    }
    for issue in env.issues.iter().take(FORMATTED_ISSUE_LIMIT) {
        out.push_str(&format!("\n  - {}: {}", issue.path, issue.message));
    }
    if env.issues.len() > FORMATTED_ISSUE_LIMIT {
        out.push_str(&format!(
            "\n  … and {} more issue(s)",
            env.issues.len() - FORMATTED_ISSUE_LIMIT
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ValidateLimits, parse_capture};

    #[test]
    fn codes_render_with_the_ws_prefix() {
        assert_eq!(ErrorCode::InvalidJson.as_str(), "WS_INVALID_JSON");
        assert_eq!(ErrorCode::Internal.to_string(), "WS_INTERNAL");
        let json = serde_json::to_string(&ErrorCode::LimitExceeded).unwrap();
        assert_eq!(json, "\"WS_LIMIT_EXCEEDED\"");
    }

    #[test]
    fn invalid_json_envelope_carries_the_cause() {
        let err = parse_capture("{truncated", &ValidateLimits::default()).unwrap_err();
        let env = ErrorEnvelope::from(&err);
        assert_eq!(env.code, ErrorCode::InvalidJson);
        assert!(env.cause.is_some());
        let rendered = format_error(&env);
        assert!(rendered.starts_with("[WS_INVALID_JSON] "));
        assert!(rendered.contains("\n  cause: "));
    }

    #[test]
    fn version_envelope_carries_path_and_received() {
        let text = r#"{"version": "99.0", "url": "u", "timestamp_ms": 0,
          "viewport": {"w_px": 1, "h_px": 1, "aspect": 1},
          "compiler": {"name": "x", "version": "y", "options_hash": "z"},
          "root": {"id": "", "role": "PAGE", "bbox": [0,0,1,1], "interactive": false, "visible": true}}"#;
        let err = parse_capture(text, &ValidateLimits::default()).unwrap_err();
        let env = ErrorEnvelope::from(&err);
        assert_eq!(env.path.as_deref(), Some("version"));
        assert_eq!(env.received.as_deref(), Some("\"99.0\""));
        let rendered = format_error(&env);
        assert!(rendered.contains("expected: "));
        assert!(rendered.contains("received: \"99.0\""));
    }

    #[test]
    fn issue_lines_are_capped() {
        let mut env = ErrorEnvelope::new(ErrorCode::InvalidCapture, "capture failed validation");
        env.issues = (0..8)
            .map(|i| Issue {
                path: format!("root.children[{i}]"),
                expected: "object".into(),
                received: "7".into(),
                message: "node must be a JSON object".into(),
            })
            .collect();
        let rendered = format_error(&env);
        assert_eq!(rendered.matches("\n  - ").count(), FORMATTED_ISSUE_LIMIT);
        assert!(rendered.contains("and 3 more"));
    }
}
