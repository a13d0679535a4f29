use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the chat client.
///
/// REPL input and CLI flags all resolve to an `Action`; the chat worker
/// executes them one at a time in the order they were submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Session --
    NewChat,
    Escalate,

    // -- Conversation --
    SendMessage(String),
    ShowHistory,
    SubmitFeedback {
        rating: Option<u8>,
        comments: String,
    },

    // -- Front end --
    Help,
    Quit,

    // -- Noop --
    None,
}
