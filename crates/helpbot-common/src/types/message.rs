use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Structured hint attached to an assistant reply.
///
/// Only `type` is interpreted; every other field is carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl SuggestedAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            details: serde_json::Map::new(),
        }
    }
}

/// One transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
    /// Client-local wall-clock time, already formatted for display.
    pub timestamp: String,
}

impl Message {
    pub fn user(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            suggested_action: None,
            timestamp: timestamp.into(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        suggested_action: Option<SuggestedAction>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            suggested_action,
            timestamp: timestamp.into(),
        }
    }

    pub fn system(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            suggested_action: None,
            timestamp: timestamp.into(),
        }
    }
}
