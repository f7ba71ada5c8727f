//! Node, text signal, and flag types.

use serde::{Deserialize, Serialize};

use crate::{BBox01, Role};

/// Size class of a normalized text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    None,
    Short,
    Sentence,
    Paragraph,
    Mixed,
}

/// Privacy-preserving summary of text content.
///
/// Raw user text never enters a capture: only the kind, the normalized
/// character count, and a digest of the normalized text are kept. A `none`
/// signal omits both `len` and `hash`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSig {
    pub kind: TextKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Capture-time hints about scrolling and repetition behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrollable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeated: Option<bool>,
}

/// One element of the IR tree.
///
/// `id` is required but may be empty before content-addressed assignment
/// (`core-hash` writes it in place). `visible = false` with
/// `interactive = false` is a legal combination, as is a zero-area bbox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub role: Role,
    pub bbox: BBox01,
    pub interactive: bool,
    pub visible: bool,
    /// Short free-form intent tag, e.g. `"primary_cta"` or `"login"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,
    /// Digest of the accessibility name / DOM id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSig>,
    /// Coarse z-bucket, 0-10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focusable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<NodeFlags>,
}

impl Node {
    /// Bare node with only the required fields set.
    pub fn new(role: Role, bbox: BBox01, interactive: bool, visible: bool) -> Self {
        Self {
            id: String::new(),
            role,
            bbox,
            interactive,
            visible,
            semantic: None,
            name_hash: None,
            text: None,
            z: None,
            enabled: None,
            focusable: None,
            children: None,
            flags: None,
        }
    }

    /// Children as a slice; empty when absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optionals_are_omitted_from_json() {
        let n = Node::new(Role::Button, BBox01::new(0.1, 0.2, 0.3, 0.1), true, true);
        let json = serde_json::to_string(&n).unwrap();
        assert!(!json.contains("semantic"));
        assert!(!json.contains("children"));
        assert!(!json.contains("flags"));
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let json = r#"{
            "id": "", "role": "TEXT", "bbox": [0, 0, 1, 0.5],
            "interactive": false, "visible": true,
            "future_field": {"nested": true}
        }"#;
        let n: Node = serde_json::from_str(json).unwrap();
        assert_eq!(n.role, Role::Text);
    }

    #[test]
    fn text_kind_uses_lowercase_tags() {
        let sig = TextSig {
            kind: TextKind::Sentence,
            len: Some(42),
            hash: Some("0a9cede7".into()),
        };
        let json = serde_json::to_string(&sig).unwrap();
        assert!(json.contains("\"sentence\""));
    }
}
