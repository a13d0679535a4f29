/// Severity level for banner notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Warning,
    Error,
}

/// A banner notice printed outside the transcript. Notices are never
/// appended to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Warning, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, title, body)
    }

    /// Generic error banner for an action whose failure has no inline
    /// transcript representation (new chat, escalation, feedback, history).
    pub fn failure(action_label: &str, reason: impl Into<String>) -> Self {
        Self::error(format!("{action_label} failed"), reason)
    }

    fn with_level(level: NotificationLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }
}
