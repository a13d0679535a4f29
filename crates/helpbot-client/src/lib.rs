//! Client for the HelpBot customer-support API.
//!
//! Provides:
//! - `SupportApi` / `AdminApi` traits describing the consumed endpoints
//! - `HttpSupportClient`, the reqwest implementation of both
//! - `ChatSession`, the session-scoped transcript with optimistic sends
//! - a chat worker that executes user actions strictly in order and
//!   publishes the resulting state changes as events

pub mod http;
pub mod session;
pub mod types;
pub mod worker;

use async_trait::async_trait;
use helpbot_common::{HelpbotError, SessionId};

pub use http::{HttpConfig, HttpSupportClient};
pub use session::{BusyFlag, ChatSession, ChatSettings, PendingSend, Transcript};
pub use types::{FaqEntry, Feedback, Metrics, Reply, SessionInfo, StoredMessage};
pub use worker::{spawn_chat_worker, ChatHandle};

/// Conversation endpoints used by the chat widget.
#[async_trait]
pub trait SupportApi: Send + Sync {
    /// `POST /sessions`
    async fn create_session(&self) -> Result<SessionId, ApiError>;

    /// `POST /sessions/{id}/message`
    async fn send_message(&self, session: &SessionId, text: &str) -> Result<Reply, ApiError>;

    /// `POST /sessions/{id}/escalate`. The response body is ignored.
    async fn escalate(&self, session: &SessionId) -> Result<(), ApiError>;

    /// `GET /sessions/{id}`
    async fn session_info(&self, session: &SessionId) -> Result<SessionInfo, ApiError>;

    /// `GET /sessions/{id}/messages`, oldest first.
    async fn list_messages(&self, session: &SessionId) -> Result<Vec<StoredMessage>, ApiError>;

    /// `POST /feedback`
    async fn submit_feedback(&self, feedback: &Feedback) -> Result<(), ApiError>;
}

/// Dashboard endpoints. Every request carries the admin `x-api-key`.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /metrics`
    async fn metrics(&self) -> Result<Metrics, ApiError>;

    /// `POST /faqs`
    async fn create_faq(&self, faq: &FaqEntry) -> Result<(), ApiError>;

    /// `POST /reindex`, returning the server's status message.
    async fn reindex(&self) -> Result<String, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<ApiError> for HelpbotError {
    fn from(e: ApiError) -> Self {
        HelpbotError::Api(e.to_string())
    }
}
