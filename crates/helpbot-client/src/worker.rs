//! Background task that owns the ChatSession.
//!
//! Front ends submit `Action`s through a `ChatHandle`; the worker runs them
//! one at a time in submission order and publishes every state change on
//! the event bus.

use std::sync::Arc;

use helpbot_common::{Action, ChatEvent, EventBus, HelpbotError, Message};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::session::{ChatSession, ChatSettings};
use crate::{ApiError, SupportApi};

/// Sending side of a running chat worker. Cheap to clone.
#[derive(Clone)]
pub struct ChatHandle {
    actions: mpsc::Sender<Action>,
    bus: Arc<EventBus>,
}

impl ChatHandle {
    /// Queue an action. Waits while the queue is full.
    pub async fn submit(&self, action: Action) -> Result<(), HelpbotError> {
        self.actions
            .send(action)
            .await
            .map_err(|_| HelpbotError::WorkerStopped)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.bus.subscribe()
    }
}

/// Start the worker on the current tokio runtime.
///
/// The task ends after `Action::Quit` or once every handle is dropped, and
/// yields the final session state.
pub fn spawn_chat_worker(
    api: Arc<dyn SupportApi>,
    settings: ChatSettings,
) -> (ChatHandle, JoinHandle<ChatSession>) {
    let (tx, rx) = mpsc::channel(settings.queue_capacity.max(1));
    let bus = Arc::new(EventBus::default());
    let session = ChatSession::new(settings);

    let handle = ChatHandle {
        actions: tx,
        bus: Arc::clone(&bus),
    };
    let task = tokio::spawn(chat_worker(api, session, rx, bus));
    (handle, task)
}

async fn chat_worker(
    api: Arc<dyn SupportApi>,
    mut session: ChatSession,
    mut actions: mpsc::Receiver<Action>,
    bus: Arc<EventBus>,
) -> ChatSession {
    info!("Chat worker started");

    while let Some(action) = actions.recv().await {
        debug!(action = action.label(), "Chat worker received action");
        if action == Action::Quit {
            break;
        }
        run_action(api.as_ref(), &mut session, &bus, action).await;
    }

    bus.publish(ChatEvent::Stopped);
    info!("Chat worker stopped");
    session
}

async fn run_action(
    api: &dyn SupportApi,
    session: &mut ChatSession,
    bus: &EventBus,
    action: Action,
) {
    let label = action.label();
    match action {
        Action::NewChat => match session.create_session(api).await {
            Ok(session_id) => {
                bus.publish(ChatEvent::SessionStarted { session_id });
            }
            Err(e) => publish_failure(bus, label, e.to_string()),
        },
        Action::SendMessage(text) => send(api, session, bus, &text).await,
        Action::Escalate => match session.escalate(api).await {
            Ok(Some(message)) => {
                bus.publish(ChatEvent::MessageAppended {
                    message,
                    tentative: false,
                });
            }
            Ok(None) => debug!("Escalate ignored without an active session"),
            Err(e) => publish_failure(bus, label, e.to_string()),
        },
        Action::ShowHistory => match history(api, session).await {
            Ok((status, messages)) => {
                bus.publish(ChatEvent::HistoryLoaded { status, messages });
            }
            Err(e) => publish_failure(bus, label, e.to_string()),
        },
        Action::SubmitFeedback { rating, comments } => {
            match session.submit_feedback(api, rating, &comments).await {
                Ok(true) => {
                    bus.publish(ChatEvent::FeedbackSent);
                }
                Ok(false) => publish_failure(bus, label, "no active session".into()),
                Err(e) => publish_failure(bus, label, e.to_string()),
            }
        }
        Action::Help | Action::Quit | Action::None => {}
    }
}

async fn history(
    api: &dyn SupportApi,
    session: &ChatSession,
) -> Result<(Option<String>, Vec<Message>), ApiError> {
    let status = session.session_status(api).await?;
    let messages = session.load_history(api).await?;
    Ok((status, messages))
}

/// Two-phase send: show the user message, await the reply, then settle.
async fn send(api: &dyn SupportApi, session: &mut ChatSession, bus: &EventBus, text: &str) {
    let Some(pending) = session.begin_send(text) else {
        return;
    };

    bus.publish(ChatEvent::MessageAppended {
        message: pending.user_message().clone(),
        tentative: true,
    });
    bus.publish(ChatEvent::BusyChanged(true));

    let result = api.send_message(pending.session_id(), pending.text()).await;
    let delivered = result.is_ok();

    if let Some(message) = session.finish_send(pending, result) {
        bus.publish(ChatEvent::MessageAppended {
            message,
            tentative: false,
        });
        bus.publish(ChatEvent::TurnSettled { delivered });
    }
    bus.publish(ChatEvent::BusyChanged(false));
}

fn publish_failure(bus: &EventBus, action: &str, reason: String) {
    bus.publish(ChatEvent::Failed {
        action: action.to_string(),
        reason,
    });
}
