//! Wire types for the support API.

use helpbot_common::{Role, SessionId, SuggestedAction};
use serde::{Deserialize, Serialize};

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateSessionResponse {
    pub session_id: SessionId,
}

/// Body sent to `POST /sessions/{id}/message`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MessageRequest<'a> {
    pub text: &'a str,
}

/// Assistant reply to a user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default)]
    pub suggested_action: Option<SuggestedAction>,
    /// Model confidence as reported by the backend. Not shown to users.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggested_action: None,
            confidence: None,
        }
    }

    pub fn with_action(mut self, action: SuggestedAction) -> Self {
        self.suggested_action = Some(action);
        self
    }
}

/// Server-side view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub start_at: String,
    pub last_active_at: String,
    /// `open` or `escalated`.
    pub status: String,
}

/// A persisted transcript entry returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub session_id: SessionId,
    pub role: Role,
    pub content: String,
    pub created_at: String,
}

/// Rating and comment for a conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub comments: String,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Metrics {
    pub total_sessions: u64,
    pub open_sessions: u64,
    pub escalated: u64,
    #[serde(default)]
    pub messages: u64,
    #[serde(default)]
    pub faqs: u64,
}

/// Knowledge-base article created from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Body of `POST /reindex`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatusResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_with_suggested_action() {
        let json = r#"{"text":"Hi there","suggested_action":{"type":"refund"},"confidence":0.9}"#;
        let reply: Reply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.text, "Hi there");
        assert_eq!(reply.suggested_action.unwrap().kind, "refund");
        assert_eq!(reply.confidence, Some(0.9));
    }

    #[test]
    fn reply_with_null_action() {
        let json = r#"{"text":"Hello","suggested_action":null}"#;
        let reply: Reply = serde_json::from_str(json).unwrap();
        assert!(reply.suggested_action.is_none());
        assert!(reply.confidence.is_none());
    }

    #[test]
    fn reply_without_text_is_rejected() {
        let result: Result<Reply, _> = serde_json::from_str(r#"{"suggested_action":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn feedback_skips_missing_optionals() {
        let feedback = Feedback {
            session_id: SessionId::new("s-1"),
            message_id: None,
            rating: Some(4),
            comments: "quick".into(),
        };
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["session_id"], "s-1");
        assert_eq!(json["rating"], 4);
        assert!(json.get("message_id").is_none());
    }

    #[test]
    fn metrics_tolerates_missing_counters() {
        let json = r#"{"total_sessions":3,"open_sessions":1,"escalated":2}"#;
        let metrics: Metrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total_sessions, 3);
        assert_eq!(metrics.faqs, 0);
    }

    #[test]
    fn stored_message_parses_role() {
        let json = r#"{"id":7,"session_id":"s-1","role":"assistant","content":"ok","created_at":"2025-01-01T00:00:00"}"#;
        let stored: StoredMessage = serde_json::from_str(json).unwrap();
        assert_eq!(stored.role, Role::Assistant);
        assert_eq!(stored.id, 7);
    }
}
