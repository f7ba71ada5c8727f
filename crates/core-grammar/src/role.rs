//! Closed role vocabulary.

use serde::{Deserialize, Serialize};

/// Semantic intent of a node.
///
/// The set is closed: there are no extension points, and a tag outside this
/// list is a validation error rather than a fallback to [`Role::Unknown`].
/// `UNKNOWN` is itself a legal tag for elements the capture tool could not
/// classify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    // Layout containers
    Page,
    Nav,
    Header,
    Footer,
    Section,
    Card,
    List,
    Table,
    // Overlays
    Modal,
    Toast,
    Dropdown,
    // Interactive primitives
    Form,
    Input,
    Button,
    Link,
    Checkbox,
    Radio,
    Icon,
    // Content
    Image,
    Text,
    Pagination,
    Unknown,
}

/// Every valid role tag, as it appears on the wire. Membership checks in the
/// raw-value validator go through this list so the reported `expected` string
/// matches the serde boundary exactly.
pub const VALID_ROLES: &[&str] = &[
    "PAGE",
    "NAV",
    "HEADER",
    "FOOTER",
    "SECTION",
    "CARD",
    "LIST",
    "TABLE",
    "MODAL",
    "TOAST",
    "DROPDOWN",
    "FORM",
    "INPUT",
    "BUTTON",
    "LINK",
    "CHECKBOX",
    "RADIO",
    "ICON",
    "IMAGE",
    "TEXT",
    "PAGINATION",
    "UNKNOWN",
];

impl Role {
    /// Wire tag for this role.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Role::Page => "PAGE",
            Role::Nav => "NAV",
            Role::Header => "HEADER",
            Role::Footer => "FOOTER",
            Role::Section => "SECTION",
            Role::Card => "CARD",
            Role::List => "LIST",
            Role::Table => "TABLE",
            Role::Modal => "MODAL",
            Role::Toast => "TOAST",
            Role::Dropdown => "DROPDOWN",
            Role::Form => "FORM",
            Role::Input => "INPUT",
            Role::Button => "BUTTON",
            Role::Link => "LINK",
            Role::Checkbox => "CHECKBOX",
            Role::Radio => "RADIO",
            Role::Icon => "ICON",
            Role::Image => "IMAGE",
            Role::Text => "TEXT",
            Role::Pagination => "PAGINATION",
            Role::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire tag. `None` for anything outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Role> {
        Some(match tag {
            "PAGE" => Role::Page,
            "NAV" => Role::Nav,
            "HEADER" => Role::Header,
            "FOOTER" => Role::Footer,
            "SECTION" => Role::Section,
            "CARD" => Role::Card,
            "LIST" => Role::List,
            "TABLE" => Role::Table,
            "MODAL" => Role::Modal,
            "TOAST" => Role::Toast,
            "DROPDOWN" => Role::Dropdown,
            "FORM" => Role::Form,
            "INPUT" => Role::Input,
            "BUTTON" => Role::Button,
            "LINK" => Role::Link,
            "CHECKBOX" => Role::Checkbox,
            "RADIO" => Role::Radio,
            "ICON" => Role::Icon,
            "IMAGE" => Role::Image,
            "TEXT" => Role::Text,
            "PAGINATION" => Role::Pagination,
            "UNKNOWN" => Role::Unknown,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip_covers_the_whole_vocabulary() {
        for tag in VALID_ROLES {
            let role = Role::from_tag(tag).unwrap();
            assert_eq!(role.as_tag(), *tag);
        }
        assert_eq!(Role::from_tag("BANNER"), None);
        assert_eq!(Role::from_tag("page"), None); // tags are case-sensitive
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&Role::Page).unwrap();
        assert_eq!(json, "\"PAGE\"");
        let back: Role = serde_json::from_str("\"TOAST\"").unwrap();
        assert_eq!(back, Role::Toast);
        assert!(serde_json::from_str::<Role>("\"WIDGET\"").is_err());
    }
}
