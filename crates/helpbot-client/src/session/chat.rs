//! Async chat operations for ChatSession: new session, send, escalate.

use helpbot_common::{Message, SessionId};
use tracing::{debug, info, warn};

use crate::{ApiError, Feedback, Reply, SupportApi};

use super::manager::ChatSession;
use super::types::PendingSend;

impl ChatSession {
    /// Ask the backend for a new session and make it the active one.
    ///
    /// On success the transcript is emptied and the id replaced. On failure
    /// the previous session and transcript are left exactly as they were.
    pub async fn create_session(&mut self, api: &dyn SupportApi) -> Result<SessionId, ApiError> {
        let id = api.create_session().await.map_err(|e| {
            warn!(error = %e, "Failed to create chat session");
            e
        })?;
        self.replace_session(id.clone());
        Ok(id)
    }

    /// First half of a send: guard, append the user message tentatively,
    /// and mark the session busy.
    ///
    /// Returns `None` without touching anything if `text` is blank, no
    /// session is active, or another send is still outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingSend> {
        if text.trim().is_empty() {
            return None;
        }
        let Some(session_id) = self.session_id.clone() else {
            debug!("Ignoring send without an active session");
            return None;
        };
        let Some(guard) = self.busy.try_acquire() else {
            warn!("Ignoring send while another is in flight");
            return None;
        };

        let user_message = Message::user(text, self.timestamp());
        let index = self.transcript.push_tentative(user_message.clone());

        Some(PendingSend {
            session_id,
            generation: self.generation,
            index,
            user_message,
            _guard: guard,
        })
    }

    /// Second half of a send: append the assistant reply, or the fallback
    /// notice if the request failed, then release the busy flag.
    ///
    /// Returns the appended message, or `None` if the session was replaced
    /// while the request was in flight (the reply is discarded).
    pub fn finish_send(
        &mut self,
        pending: PendingSend,
        result: Result<Reply, ApiError>,
    ) -> Option<Message> {
        if pending.generation != self.generation {
            debug!(
                session = %pending.session_id,
                "Discarding reply for a replaced session"
            );
            return None;
        }

        let message = match result {
            Ok(reply) => Message::assistant(reply.text, reply.suggested_action, self.timestamp()),
            Err(e) => {
                warn!(session = %pending.session_id, error = %e, "Message send failed");
                Message::system(
                    self.settings.backend_unreachable_text.clone(),
                    self.timestamp(),
                )
            }
        };

        self.transcript.settle(pending.index, message.clone());
        Some(message)
    }

    /// Send `text` and wait for the reply.
    ///
    /// The user message is appended immediately; on return the transcript
    /// holds either the assistant reply or the fallback notice after it.
    /// Returns `None` when the send was a no-op.
    pub async fn send_message(&mut self, api: &dyn SupportApi, text: &str) -> Option<Message> {
        let pending = self.begin_send(text)?;
        let result = api.send_message(&pending.session_id, pending.text()).await;
        self.finish_send(pending, result)
    }

    /// Hand the session to human support.
    ///
    /// Appends the confirmation notice on success. Returns `Ok(None)` when
    /// there is no active session; on failure nothing is appended.
    pub async fn escalate(&mut self, api: &dyn SupportApi) -> Result<Option<Message>, ApiError> {
        let Some(session_id) = self.session_id.clone() else {
            return Ok(None);
        };

        api.escalate(&session_id).await.map_err(|e| {
            warn!(session = %session_id, error = %e, "Escalation failed");
            e
        })?;

        info!(session = %session_id, "Session escalated");
        let message = Message::system(self.settings.escalation_sent_text.clone(), self.timestamp());
        self.transcript.push(message.clone());
        Ok(Some(message))
    }

    /// Fetch the server's copy of the transcript, newest `history_limit`
    /// entries, oldest first. Empty when no session is active.
    pub async fn load_history(&self, api: &dyn SupportApi) -> Result<Vec<Message>, ApiError> {
        let Some(session_id) = self.session_id.as_ref() else {
            return Ok(Vec::new());
        };

        let stored = api.list_messages(session_id).await?;
        let skip = stored.len().saturating_sub(self.settings.history_limit);
        Ok(stored
            .into_iter()
            .skip(skip)
            .map(|m| Message {
                role: m.role,
                content: m.content,
                suggested_action: None,
                timestamp: m.created_at,
            })
            .collect())
    }

    /// Server-side status of the active session (`open` or `escalated`).
    /// `None` when no session is active.
    pub async fn session_status(&self, api: &dyn SupportApi) -> Result<Option<String>, ApiError> {
        let Some(session_id) = self.session_id.as_ref() else {
            return Ok(None);
        };
        let info = api.session_info(session_id).await?;
        Ok(Some(info.status))
    }

    /// Rate the active session. Returns `Ok(false)` when there is none.
    pub async fn submit_feedback(
        &self,
        api: &dyn SupportApi,
        rating: Option<u8>,
        comments: &str,
    ) -> Result<bool, ApiError> {
        let Some(session_id) = self.session_id.clone() else {
            return Ok(false);
        };

        let feedback = Feedback {
            session_id,
            message_id: None,
            rating,
            comments: comments.to_string(),
        };
        api.submit_feedback(&feedback).await?;
        Ok(true)
    }
}
