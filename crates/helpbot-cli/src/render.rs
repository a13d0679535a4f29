//! Plain-text rendering for the chat REPL and admin commands.

use helpbot_client::Metrics;
use helpbot_common::{Action, ChatEvent, Message, Notification, NotificationLevel, Role};

pub const TYPING_INDICATOR: &str = "HelpBot is typing...";

/// User lines are right-aligned to this column.
const TRANSCRIPT_WIDTH: usize = 72;

pub fn format_message(message: &Message) -> String {
    match message.role {
        Role::User => {
            let line = format!("{}  [you {}]", message.content, message.timestamp);
            format!("{line:>width$}", width = TRANSCRIPT_WIDTH)
        }
        Role::Assistant => {
            let mut out = format!("[{}] HelpBot: {}", message.timestamp, message.content);
            if let Some(action) = &message.suggested_action {
                out.push_str(&format!("\n           Suggested: {}", action.kind));
            }
            out
        }
        Role::System => format!("[{}] * {}", message.timestamp, message.content),
    }
}

pub fn format_notification(notification: &Notification) -> String {
    let tag = match notification.level {
        NotificationLevel::Warning => "warning",
        NotificationLevel::Error => "error",
    };
    format!("!! [{tag}] {}: {}", notification.title, notification.body)
}

/// Line(s) to print for a worker event. Failures are returned as
/// notifications by the caller, so they render to `None` here.
pub fn format_event(event: &ChatEvent) -> Option<String> {
    match event {
        ChatEvent::SessionStarted { session_id } => {
            Some(format!("-- New chat started (session {session_id}) --"))
        }
        ChatEvent::MessageAppended { message, .. } => Some(format_message(message)),
        ChatEvent::BusyChanged(true) => Some(TYPING_INDICATOR.to_string()),
        ChatEvent::HistoryLoaded { status, messages } => {
            Some(format_history(status.as_deref(), messages))
        }
        ChatEvent::FeedbackSent => Some("-- Thanks for the feedback --".to_string()),
        ChatEvent::BusyChanged(false)
        | ChatEvent::TurnSettled { .. }
        | ChatEvent::Failed { .. }
        | ChatEvent::Stopped
        | ChatEvent::Unknown => None,
    }
}

fn format_history(status: Option<&str>, messages: &[Message]) -> String {
    let Some(status) = status else {
        return "-- No active session --".to_string();
    };
    let mut out = format!("-- Session {status}, {} stored messages --", messages.len());
    for message in messages {
        out.push('\n');
        out.push_str(&format_message(message));
    }
    out
}

pub fn help_text() -> String {
    let mut out = String::from("Commands:");
    for action in Action::repl_actions() {
        out.push_str(&format!("\n  {:<28} {}", action.usage(), action.label()));
    }
    out.push_str("\nStart a message with // to send text beginning with /.");
    out
}

pub fn format_metrics(metrics: &Metrics) -> String {
    format!(
        "Total sessions: {}\nOpen sessions:  {}\nEscalated:      {}\nMessages:       {}\nFAQs:           {}",
        metrics.total_sessions,
        metrics.open_sessions,
        metrics.escalated,
        metrics.messages,
        metrics.faqs
    )
}
