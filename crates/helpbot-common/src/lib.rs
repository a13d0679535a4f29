//! Shared types for the HelpBot workspace.
//!
//! Holds the chat message model, user actions, the chat event bus,
//! banner notices, and the error types every crate reports through.

pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, HelpbotError};
pub use events::{ChatEvent, EventBus};
pub use id::{new_correlation_id, SessionId};
pub use notifications::{Notification, NotificationLevel};
pub use types::{Message, Role, SuggestedAction};
