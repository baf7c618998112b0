//! Caller-owned conversation state for the summary Q&A flow.

use crate::types::ChatMessage;

/// Append-only log of chat turns.
///
/// The log is replayed to the model on every follow-up call, so order is
/// the conversational context itself. Turns are never edited or removed
/// individually; the only way back to empty is a full reset, which the
/// summarize flow performs whenever a new base text is summarized.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<ChatMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one turn at the end.
    pub fn append(&mut self, turn: ChatMessage) {
        self.turns.push(turn);
    }

    /// Add several turns at the end, keeping their order. Batching is
    /// order-transparent: appending [A, B] then C leaves the same log as
    /// appending A then [B, C].
    pub fn extend<I>(&mut self, turns: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        self.turns.extend(turns);
    }

    /// Clear the log entirely.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
