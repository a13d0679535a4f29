//! ChatSession struct and state accessors.

use helpbot_common::{Message, SessionId};
use tracing::info;

use super::transcript::Transcript;
use super::types::{local_timestamp, BusyFlag, ChatSettings};

/// Chat state for one client: the active session, its transcript, and
/// the busy flag.
pub struct ChatSession {
    /// Server-issued id. `None` until the first session is created.
    pub(super) session_id: Option<SessionId>,
    /// Messages for the active session only.
    pub(super) transcript: Transcript,
    pub(super) settings: ChatSettings,
    pub(super) busy: BusyFlag,
    /// Bumped every time the session is replaced, so replies for an old
    /// session can be recognised and dropped.
    pub(super) generation: u64,
}

impl ChatSession {
    pub fn new(settings: ChatSettings) -> Self {
        Self {
            session_id: None,
            transcript: Transcript::new(),
            settings,
            busy: BusyFlag::default(),
            generation: 0,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session_id.is_some()
    }

    /// Get the transcript of the active session.
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// A handle other tasks can poll to show a typing indicator.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Swap in a new session and drop the old transcript.
    pub(super) fn replace_session(&mut self, id: SessionId) {
        info!(session = %id, "Chat session started");
        self.session_id = Some(id);
        self.transcript.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub(super) fn timestamp(&self) -> String {
        local_timestamp(&self.settings.timestamp_format)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ChatSettings::default())
    }
}
