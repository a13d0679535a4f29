//! Session types and concurrency guards.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use helpbot_common::{Message, SessionId};
use helpbot_config::schema::{ChatConfig, BACKEND_UNREACHABLE_TEXT, ESCALATION_SENT_TEXT};

/// Fixed texts and limits for a chat session.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub backend_unreachable_text: String,
    pub escalation_sent_text: String,
    pub timestamp_format: String,
    pub queue_capacity: usize,
    pub history_limit: usize,
}

impl ChatSettings {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            backend_unreachable_text: config.backend_unreachable_text.clone(),
            escalation_sent_text: config.escalation_sent_text.clone(),
            timestamp_format: config.timestamp_format.clone(),
            queue_capacity: config.queue_capacity.max(1) as usize,
            history_limit: config.history_limit.max(1) as usize,
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            backend_unreachable_text: BACKEND_UNREACHABLE_TEXT.into(),
            escalation_sent_text: ESCALATION_SENT_TEXT.into(),
            timestamp_format: "%H:%M:%S".into(),
            queue_capacity: 32,
            history_limit: 50,
        }
    }
}

/// Shared, read-only view of a session's busy flag.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag if it is clear. Returns `None` if a send is already
    /// outstanding.
    pub(crate) fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(BusyGuard {
            flag: Arc::clone(&self.0),
        })
    }
}

/// Clears the busy flag on drop, so it is released on every exit path
/// including a cancelled future.
#[derive(Debug)]
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// A send whose user message is already in the transcript but whose
/// reply has not been applied yet.
///
/// Holding one keeps the session busy. Hand it back to
/// [`ChatSession::finish_send`](super::ChatSession::finish_send) with the
/// API result to settle it.
#[must_use = "a pending send keeps the session busy until it is finished"]
#[derive(Debug)]
pub struct PendingSend {
    pub(crate) session_id: SessionId,
    pub(crate) generation: u64,
    pub(crate) index: usize,
    pub(crate) user_message: Message,
    pub(crate) _guard: BusyGuard,
}

impl PendingSend {
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The literal text typed by the user.
    pub fn text(&self) -> &str {
        &self.user_message.content
    }

    /// The tentatively appended user message.
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }

    /// Transcript position of the user message.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Current local time rendered with `format`. Falls back to `%H:%M:%S`
/// when the format string is not understood.
pub(crate) fn local_timestamp(format: &str) -> String {
    let now = chrono::Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format("%H:%M:%S"));
    }
    out
}
