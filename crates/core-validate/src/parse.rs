//! Strict parse-and-validate entry point.

use core_grammar::Capture;
use serde_json::Value;
use thiserror::Error;

use crate::issues::{Issue, ValidateLimits};
use crate::validator::{MSG_DEPTH_LIMIT, MSG_NODE_LIMIT, validate_capture};

/// Failure modes of [`parse_capture`], classified most-specific-first:
/// version problems beat limit problems beat general validation problems.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not JSON at all.
    #[error("input is not valid JSON")]
    InvalidJson {
        #[source]
        cause: serde_json::Error,
    },
    /// `version` is present but not a supported value. `received` carries the
    /// compact JSON rendering of whatever was there.
    #[error("unsupported schema version (received {received})")]
    UnsupportedVersion { received: String },
    /// The capture exceeds the node-count or depth ceiling.
    #[error("{message}")]
    LimitExceeded { message: String },
    /// Structurally valid JSON that fails schema checks.
    #[error("capture failed validation with {} issue(s)", .issues.len())]
    InvalidCapture { issues: Vec<Issue> },
    /// A value the validator cleared failed typed decoding; this indicates a
    /// gap between the walk and the model, not a user error.
    #[error("internal: {message}")]
    Internal { message: String },
}

/// Parse serialized text into a typed capture, or fail with the most
/// specific classification of what is wrong with it.
pub fn parse_capture(text: &str, limits: &ValidateLimits) -> Result<Capture, ParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|cause| ParseError::InvalidJson { cause })?;

    let issues = validate_capture(&value, limits);

    if let Some(issue) = issues.iter().find(|i| i.path == "version") {
        return Err(ParseError::UnsupportedVersion {
            received: issue.received.clone(),
        });
    }
    if let Some(issue) = issues
        .iter()
        .find(|i| i.message.starts_with(MSG_NODE_LIMIT) || i.message.starts_with(MSG_DEPTH_LIMIT))
    {
        return Err(ParseError::LimitExceeded {
            message: issue.message.clone(),
        });
    }
    if !issues.is_empty() {
        tracing::debug!(
            target: "websketch.validate",
            issues = issues.len(),
            "strict parse rejected capture"
        );
        return Err(ParseError::InvalidCapture { issues });
    }

    serde_json::from_value(value).map_err(|e| ParseError::Internal {
        message: format!("validated capture failed typed decode: {e}"),
    })
}
