use serde::{Deserialize, Serialize};

/// System notice appended when a send fails for any reason.
pub const BACKEND_UNREACHABLE_TEXT: &str = "⚠️ Could not reach backend.";
/// System notice appended after a successful escalation.
pub const ESCALATION_SENT_TEXT: &str = "🔔 Escalation sent to human support.";

/// Chat client behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Start a session as soon as the REPL opens instead of waiting for `/new`.
    pub auto_start: bool,
    pub backend_unreachable_text: String,
    pub escalation_sent_text: String,
    /// chrono format string for message timestamps (local time).
    pub timestamp_format: String,
    /// Pending actions the worker will buffer (valid range: 1-1024).
    pub queue_capacity: u32,
    /// Entries shown by `/history` (valid range: 1-500).
    pub history_limit: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            auto_start: false,
            backend_unreachable_text: BACKEND_UNREACHABLE_TEXT.into(),
            escalation_sent_text: ESCALATION_SENT_TEXT.into(),
            timestamp_format: "%H:%M:%S".into(),
            queue_capacity: 32,
            history_limit: 50,
        }
    }
}
