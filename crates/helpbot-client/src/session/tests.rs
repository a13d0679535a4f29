//! ChatSession behaviour against an in-memory SupportApi.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use helpbot_common::{Role, SessionId, SuggestedAction};

use super::*;
use crate::{ApiError, Feedback, Reply, SessionInfo, StoredMessage, SupportApi};

#[derive(Default)]
struct FakeApi {
    sessions_created: AtomicU32,
    fail_create: AtomicBool,
    fail_send: AtomicBool,
    fail_escalate: AtomicBool,
    reply: Mutex<Option<Reply>>,
    sent: Mutex<Vec<(SessionId, String)>>,
    escalated: Mutex<Vec<SessionId>>,
    feedback: Mutex<Vec<Feedback>>,
    history: Mutex<Vec<StoredMessage>>,
}

impl FakeApi {
    fn replying(reply: Reply) -> Self {
        let api = Self::default();
        *api.reply.lock().unwrap() = Some(reply);
        api
    }

    fn sent(&self) -> Vec<(SessionId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SupportApi for FakeApi {
    async fn create_session(&self) -> Result<SessionId, ApiError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ApiError::NetworkError("connection refused".into()));
        }
        let n = self.sessions_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SessionId::new(format!("session-{n}")))
    }

    async fn send_message(&self, session: &SessionId, text: &str) -> Result<Reply, ApiError> {
        self.sent
            .lock()
            .unwrap()
            .push((session.clone(), text.to_string()));
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(ApiError::HttpStatus {
                status: 502,
                body: "bad gateway".into(),
            });
        }
        Ok(self
            .reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Reply::text("ok")))
    }

    async fn escalate(&self, session: &SessionId) -> Result<(), ApiError> {
        if self.fail_escalate.load(Ordering::SeqCst) {
            return Err(ApiError::NotFound("session not found".into()));
        }
        self.escalated.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn session_info(&self, session: &SessionId) -> Result<SessionInfo, ApiError> {
        Ok(SessionInfo {
            id: session.clone(),
            start_at: String::new(),
            last_active_at: String::new(),
            status: "open".into(),
        })
    }

    async fn list_messages(&self, _session: &SessionId) -> Result<Vec<StoredMessage>, ApiError> {
        Ok(self.history.lock().unwrap().clone())
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<(), ApiError> {
        self.feedback.lock().unwrap().push(feedback.clone());
        Ok(())
    }
}

async fn started(api: &FakeApi) -> ChatSession {
    let mut session = ChatSession::default();
    session.create_session(api).await.unwrap();
    session
}

#[tokio::test]
async fn hello_scenario_appends_user_then_assistant() {
    let api = FakeApi::replying(Reply::text("Hi there").with_action(SuggestedAction::new("refund")));
    let mut session = started(&api).await;

    let reply = session.send_message(&api, "Hello").await.unwrap();
    assert_eq!(reply.role, Role::Assistant);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "Hello");
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "Hi there");
    assert_eq!(
        messages[1].suggested_action.as_ref().map(|a| a.kind.as_str()),
        Some("refund")
    );
    assert_eq!(api.sent(), vec![(SessionId::new("session-1"), "Hello".into())]);
}

#[tokio::test]
async fn blank_input_is_a_noop() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    for text in ["", " ", "   ", "\n", "\t \r\n"] {
        assert!(session.send_message(&api, text).await.is_none());
    }

    assert!(session.messages().is_empty());
    assert!(api.sent().is_empty());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn send_without_session_is_a_noop() {
    let api = FakeApi::default();
    let mut session = ChatSession::default();

    assert!(session.send_message(&api, "anyone there?").await.is_none());
    assert!(session.messages().is_empty());
    assert!(api.sent().is_empty());
}

#[tokio::test]
async fn input_is_sent_and_stored_literally() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    session.send_message(&api, "  my order #42  ").await;

    assert_eq!(session.messages()[0].content, "  my order #42  ");
    assert_eq!(api.sent()[0].1, "  my order #42  ");
}

#[tokio::test]
async fn failed_send_appends_fallback_after_user_message() {
    let api = FakeApi::default();
    api.fail_send.store(true, Ordering::SeqCst);
    let mut session = started(&api).await;

    let notice = session.send_message(&api, "Hello").await.unwrap();
    assert_eq!(notice.role, Role::System);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "Hello");
    assert_eq!(messages[1].role, Role::System);
    assert!(messages[1].content.contains("Could not reach backend"));
    assert!(messages[1].suggested_action.is_none());
}

#[tokio::test]
async fn busy_is_cleared_after_success_and_failure() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    session.send_message(&api, "one").await;
    assert!(!session.is_busy());

    api.fail_send.store(true, Ordering::SeqCst);
    session.send_message(&api, "two").await;
    assert!(!session.is_busy());
    assert!(session.transcript().pending().is_none());
}

#[tokio::test]
async fn begin_send_is_tentative_until_finished() {
    let api = FakeApi::default();
    let mut session = started(&api).await;
    let flag = session.busy_flag();

    let pending = session.begin_send("Hello").unwrap();
    assert!(flag.is_busy());
    assert_eq!(pending.index(), 0);
    assert_eq!(pending.text(), "Hello");
    assert!(session.transcript().is_pending(0));
    assert_eq!(session.messages().len(), 1);

    let appended = session.finish_send(pending, Ok(Reply::text("Hi")));
    assert_eq!(appended.unwrap().content, "Hi");
    assert!(!flag.is_busy());
    assert!(!session.transcript().is_pending(0));
    assert_eq!(session.messages().len(), 2);
}

#[tokio::test]
async fn second_send_is_refused_while_one_is_pending() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    let first = session.begin_send("first").unwrap();
    assert!(session.begin_send("second").is_none());
    assert_eq!(session.messages().len(), 1);

    session.finish_send(first, Ok(Reply::text("ack")));
    assert!(session.begin_send("second").is_some());
}

#[tokio::test]
async fn dropping_a_pending_send_releases_busy() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    let pending = session.begin_send("Hello").unwrap();
    assert!(session.is_busy());
    drop(pending);
    assert!(!session.is_busy());
    // The user message stays visible.
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn reply_for_replaced_session_is_discarded() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    let pending = session.begin_send("old question").unwrap();
    session.create_session(&api).await.unwrap();

    assert!(session
        .finish_send(pending, Ok(Reply::text("late answer")))
        .is_none());
    assert!(session.messages().is_empty());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn create_session_resets_transcript_and_replaces_id() {
    let api = FakeApi::default();
    let mut session = started(&api).await;
    session.send_message(&api, "Hello").await;
    assert_eq!(session.messages().len(), 2);

    let id = session.create_session(&api).await.unwrap();

    assert_eq!(id, SessionId::new("session-2"));
    assert_eq!(session.session_id(), Some(&id));
    assert!(session.messages().is_empty());
}

#[tokio::test]
async fn failed_create_keeps_previous_session() {
    let api = FakeApi::default();
    let mut session = started(&api).await;
    session.send_message(&api, "Hello").await;

    api.fail_create.store(true, Ordering::SeqCst);
    let result = session.create_session(&api).await;

    assert!(matches!(result, Err(ApiError::NetworkError(_))));
    assert_eq!(session.session_id(), Some(&SessionId::new("session-1")));
    assert_eq!(session.messages().len(), 2);
}

#[tokio::test]
async fn escalate_appends_one_confirmation() {
    let api = FakeApi::default();
    let mut session = started(&api).await;

    let notice = session.escalate(&api).await.unwrap().unwrap();

    assert_eq!(session.messages().len(), 1);
    assert_eq!(notice.role, Role::System);
    assert_eq!(notice.content, "🔔 Escalation sent to human support.");
    assert_eq!(
        api.escalated.lock().unwrap().as_slice(),
        &[SessionId::new("session-1")]
    );
}

#[tokio::test]
async fn escalate_without_session_is_a_noop() {
    let api = FakeApi::default();
    let mut session = ChatSession::default();

    assert!(session.escalate(&api).await.unwrap().is_none());
    assert!(session.messages().is_empty());
    assert!(api.escalated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_escalate_appends_nothing() {
    let api = FakeApi::default();
    api.fail_escalate.store(true, Ordering::SeqCst);
    let mut session = started(&api).await;

    let result = session.escalate(&api).await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
    assert!(session.messages().is_empty());
}

#[tokio::test]
async fn custom_texts_are_used() {
    let api = FakeApi::default();
    api.fail_send.store(true, Ordering::SeqCst);
    let settings = ChatSettings {
        backend_unreachable_text: "offline".into(),
        escalation_sent_text: "handed over".into(),
        ..ChatSettings::default()
    };
    let mut session = ChatSession::new(settings);
    session.create_session(&api).await.unwrap();

    session.send_message(&api, "hi").await;
    session.escalate(&api).await.unwrap();

    let contents: Vec<_> = session.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["hi", "offline", "handed over"]);
}

#[tokio::test]
async fn history_keeps_newest_entries() {
    let api = FakeApi::default();
    *api.history.lock().unwrap() = (1..=5)
        .map(|i| StoredMessage {
            id: i,
            session_id: SessionId::new("session-1"),
            role: if i % 2 == 1 { Role::User } else { Role::Assistant },
            content: format!("m{i}"),
            created_at: format!("2025-01-01T00:00:0{i}"),
        })
        .collect();
    let settings = ChatSettings {
        history_limit: 3,
        ..ChatSettings::default()
    };
    let mut session = ChatSession::new(settings);
    assert!(session.load_history(&api).await.unwrap().is_empty());

    session.create_session(&api).await.unwrap();
    let history = session.load_history(&api).await.unwrap();

    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["m3", "m4", "m5"]);
    assert_eq!(history[0].timestamp, "2025-01-01T00:00:03");
    // Local transcript is untouched.
    assert!(session.messages().is_empty());
}

#[tokio::test]
async fn feedback_needs_a_session() {
    let api = FakeApi::default();
    let mut session = ChatSession::default();
    assert!(!session.submit_feedback(&api, Some(5), "great").await.unwrap());

    session.create_session(&api).await.unwrap();
    assert!(session.submit_feedback(&api, Some(5), "great").await.unwrap());

    let sent = api.feedback.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].session_id, SessionId::new("session-1"));
    assert_eq!(sent[0].rating, Some(5));
}

#[test]
fn timestamp_falls_back_on_bad_format() {
    let stamp = super::types::local_timestamp("%Q");
    assert_eq!(stamp.len(), 8);
    assert_eq!(stamp.matches(':').count(), 2);
}

#[tokio::test]
async fn session_status_needs_a_session() {
    let api = FakeApi::default();
    let mut session = ChatSession::default();
    assert!(session.session_status(&api).await.unwrap().is_none());

    session.create_session(&api).await.unwrap();
    assert_eq!(
        session.session_status(&api).await.unwrap().as_deref(),
        Some("open")
    );
}
