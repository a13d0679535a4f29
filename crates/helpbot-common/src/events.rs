use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::SessionId;
use crate::types::Message;

/// State changes published by the chat worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    /// A new session replaced the previous one; the transcript is empty.
    SessionStarted { session_id: SessionId },
    /// An entry was appended to the transcript. `tentative` is set for the
    /// user half of a send that has not been answered yet.
    MessageAppended { message: Message, tentative: bool },
    /// The pending user message was answered (`delivered`) or fell back to
    /// the unreachable-backend notice.
    TurnSettled { delivered: bool },
    BusyChanged(bool),
    /// Server-side history for the active session and its status
    /// (`open` or `escalated`), if one is active.
    HistoryLoaded {
        status: Option<String>,
        messages: Vec<Message>,
    },
    FeedbackSent,
    /// An action other than a send failed. Nothing was appended.
    Failed { action: String, reason: String },
    Stopped,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ChatEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
