//! Interactive chat loop: stdin lines in, worker events out.

use std::io::Write;
use std::sync::Arc;

use helpbot_client::{spawn_chat_worker, ChatSettings, SupportApi};
use helpbot_common::{Action, ChatEvent, HelpbotError, Notification};
use helpbot_config::schema::ChatConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::render;

pub async fn run(api: Arc<dyn SupportApi>, config: &ChatConfig) -> Result<(), HelpbotError> {
    let (handle, worker) = spawn_chat_worker(api, ChatSettings::from_config(config));
    let printer = tokio::spawn(print_events(handle.subscribe(), std::io::stdout()));

    println!("{}", render::help_text());
    if config.auto_start {
        handle.submit(Action::NewChat).await?;
    } else {
        println!("Type /new to start a chat.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Action::from_input(&line) {
            Action::Help => println!("{}", render::help_text()),
            Action::Quit => break,
            Action::None => println!("Unknown command. Type /help for the list."),
            action => handle.submit(action).await?,
        }
    }

    handle.submit(Action::Quit).await?;
    let session = worker
        .await
        .map_err(|e| HelpbotError::Other(format!("chat worker failed: {e}")))?;
    if let Err(e) = printer.await {
        warn!("Event printer failed: {e}");
    }

    info!(messages = session.messages().len(), "Chat ended");
    Ok(())
}

/// Render worker events to `out` until the worker stops. Failed actions
/// are printed as error banners, never as transcript lines.
async fn print_events<W: Write>(mut events: broadcast::Receiver<ChatEvent>, mut out: W) -> W {
    loop {
        let text = match events.recv().await {
            Ok(ChatEvent::Stopped) | Err(broadcast::error::RecvError::Closed) => break,
            Ok(ChatEvent::Failed { action, reason }) => Some(render::format_notification(
                &Notification::failure(&action, reason),
            )),
            Ok(event) => render::format_event(&event),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Chat output fell behind; some events were dropped");
                Some(render::format_notification(&Notification::warning(
                    "Output skipped",
                    format!("{skipped} chat events were not shown"),
                )))
            }
        };

        if let Some(text) = text {
            if let Err(e) = writeln!(out, "{text}") {
                warn!("Failed to write chat output: {e}");
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use helpbot_common::{EventBus, Message};

    use super::*;

    async fn printed(events: Vec<ChatEvent>, capacity: usize) -> String {
        let bus = EventBus::new(capacity);
        let rx = bus.subscribe();
        for event in events {
            bus.publish(event);
        }
        let out = print_events(rx, Vec::new()).await;
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn prints_turn_then_stops() {
        let out = printed(
            vec![
                ChatEvent::MessageAppended {
                    message: Message::user("Hello", "10:00:00"),
                    tentative: true,
                },
                ChatEvent::BusyChanged(true),
                ChatEvent::MessageAppended {
                    message: Message::assistant("Hi there", None, "10:00:01"),
                    tentative: false,
                },
                ChatEvent::TurnSettled { delivered: true },
                ChatEvent::BusyChanged(false),
                ChatEvent::Stopped,
                ChatEvent::FeedbackSent,
            ],
            16,
        )
        .await;

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Hello  [you 10:00:00]"));
        assert_eq!(lines[1], render::TYPING_INDICATOR);
        assert_eq!(lines[2], "[10:00:01] HelpBot: Hi there");
    }

    #[tokio::test]
    async fn failures_print_as_banners() {
        let out = printed(
            vec![
                ChatEvent::Failed {
                    action: "New Chat".into(),
                    reason: "Network error: connection refused".into(),
                },
                ChatEvent::Stopped,
            ],
            16,
        )
        .await;

        assert_eq!(
            out,
            "!! [error] New Chat failed: Network error: connection refused\n"
        );
    }

    #[tokio::test]
    async fn lagging_prints_a_warning() {
        let mut events: Vec<_> = (0..6).map(|_| ChatEvent::BusyChanged(false)).collect();
        events.push(ChatEvent::Stopped);
        let out = printed(events, 4).await;

        assert!(out.starts_with("!! [warning] Output skipped: "));
        assert!(out.contains("chat events were not shown"));
    }
}
