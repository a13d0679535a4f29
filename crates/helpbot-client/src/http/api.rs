//! SupportApi trait implementation for HttpSupportClient.

use async_trait::async_trait;
use helpbot_common::SessionId;
use tracing::debug;

use crate::types::{CreateSessionResponse, MessageRequest};
use crate::{ApiError, Feedback, Reply, SessionInfo, StoredMessage, SupportApi};

use super::client::HttpSupportClient;

#[async_trait]
impl SupportApi for HttpSupportClient {
    async fn create_session(&self) -> Result<SessionId, ApiError> {
        let request = self.http.post(self.url("/sessions"));
        let response = self.execute(request, "create_session").await?;
        let body: CreateSessionResponse = Self::decode(response).await?;
        Ok(body.session_id)
    }

    async fn send_message(&self, session: &SessionId, text: &str) -> Result<Reply, ApiError> {
        let request = self
            .http
            .post(self.session_url(session, "/message"))
            .json(&MessageRequest { text });
        let response = self.execute(request, "send_message").await?;
        let reply: Reply = Self::decode(response).await?;

        debug!(
            session = %session,
            confidence = ?reply.confidence,
            action = ?reply.suggested_action.as_ref().map(|a| a.kind.as_str()),
            "Reply received"
        );
        Ok(reply)
    }

    async fn escalate(&self, session: &SessionId) -> Result<(), ApiError> {
        let request = self.http.post(self.session_url(session, "/escalate"));
        self.execute(request, "escalate").await?;
        Ok(())
    }

    async fn session_info(&self, session: &SessionId) -> Result<SessionInfo, ApiError> {
        let request = self.http.get(self.session_url(session, ""));
        let response = self.execute(request, "session_info").await?;
        Self::decode(response).await
    }

    async fn list_messages(&self, session: &SessionId) -> Result<Vec<StoredMessage>, ApiError> {
        let request = self.http.get(self.session_url(session, "/messages"));
        let response = self.execute(request, "list_messages").await?;
        Self::decode(response).await
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<(), ApiError> {
        let request = self.http.post(self.url("/feedback")).json(feedback);
        self.execute(request, "submit_feedback").await?;
        Ok(())
    }
}
