//! Session-scoped chat state.
//!
//! A `ChatSession` holds the server-issued session id, the transcript for
//! that session, and the busy flag for the one send that may be in flight.
//! Sends are optimistic: the user's message is appended before the request
//! resolves and is always followed by either the reply or a fallback notice.

mod chat;
mod manager;
mod transcript;
mod types;

#[cfg(test)]
mod tests;

pub use manager::ChatSession;
pub use transcript::Transcript;
pub use types::{BusyFlag, ChatSettings, PendingSend};
