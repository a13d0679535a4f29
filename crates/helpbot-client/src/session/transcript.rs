//! Append-only message history for one session.

use helpbot_common::Message;

/// Ordered transcript. Insertion order is display order.
///
/// At most one entry is pending at a time: the user message of a send
/// that has been shown but not yet answered.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The unanswered user message, if a send is in flight.
    pub fn pending(&self) -> Option<&Message> {
        self.pending.and_then(|i| self.messages.get(i))
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending == Some(index)
    }

    pub(crate) fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    /// Append the user half of a send and mark it pending.
    pub(crate) fn push_tentative(&mut self, message: Message) -> usize {
        let index = self.push(message);
        self.pending = Some(index);
        index
    }

    /// Confirm the pending entry at `index` and append its follow-up
    /// (the reply or the fallback notice).
    pub(crate) fn settle(&mut self, index: usize, follow_up: Message) -> usize {
        if self.pending == Some(index) {
            self.pending = None;
        }
        self.push(follow_up)
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
        self.pending = None;
    }
}
