//! Conversation controller: the client-side state owner for the transcript,
//! the outstanding-request flag, and the input-recall buffer.
//!
//! The controller is pure state plus one async seam (`TurnRelay`), so the
//! terminal client stays a thin rendering shell and every behavior here is
//! unit-testable without a server.

use chatbox_types::chat::ChatMessage;
use chatbox_types::error::RelayError;
use tracing::debug;

/// Appended as the assistant turn when a relay call fails for any reason.
pub const ERROR_REPLY: &str = "Error getting reply.";

/// The controller's view of the relay: send the full conversation, get one
/// assistant reply back.
pub trait TurnRelay: Send + Sync {
    fn send(
        &self,
        conversation: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<String, RelayError>> + Send;
}

/// Recall-buffer cursor as an explicit state machine.
///
/// `SelectionAt(i)` always holds a valid index into the input history; the
/// boundary moves (clamp at the start, walk off the end) are encoded in the
/// transitions, not in arithmetic on an optional integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCursor {
    NoSelection,
    SelectionAt(usize),
}

/// What a `submit` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The assistant's reply was appended to the transcript.
    Replied,
    /// The relay failed; the error placeholder was appended instead.
    Failed,
    /// Empty input or a call while a submission was already in flight.
    Ignored,
}

/// Owns the message list, the pending flag, and the recall buffer for the
/// lifetime of a chat session.
///
/// Invariants: the transcript is append-only (no reordering, no deletion),
/// and at most one relay call is outstanding — the reply for submission N is
/// appended before submission N+1 can start.
pub struct ConversationController<R: TurnRelay> {
    relay: R,
    conversation: Vec<ChatMessage>,
    pending: bool,
    input_history: Vec<String>,
    cursor: HistoryCursor,
    draft: String,
}

impl<R: TurnRelay> ConversationController<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            conversation: Vec::new(),
            pending: false,
            input_history: Vec::new(),
            cursor: HistoryCursor::NoSelection,
            draft: String::new(),
        }
    }

    /// The transcript so far.
    pub fn conversation(&self) -> &[ChatMessage] {
        &self.conversation
    }

    /// Whether a relay call is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Previously submitted raw inputs, oldest first.
    pub fn input_history(&self) -> &[String] {
        &self.input_history
    }

    /// Current draft input, as set by recall navigation.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submit a user turn and wait for the assistant's reply.
    ///
    /// No-op for whitespace-only input or while a call is pending. Otherwise
    /// appends the user message, records the raw text in the recall buffer,
    /// resets the cursor, relays the full updated conversation, and appends
    /// the reply — or [`ERROR_REPLY`] when the relay fails.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() || self.pending {
            return SubmitOutcome::Ignored;
        }

        self.conversation.push(ChatMessage::user(text));
        self.input_history.push(text.to_string());
        self.cursor = HistoryCursor::NoSelection;
        self.draft.clear();
        self.pending = true;

        let result = self.relay.send(&self.conversation).await;
        self.pending = false;

        match result {
            Ok(reply) => {
                self.conversation.push(ChatMessage::assistant(reply));
                SubmitOutcome::Replied
            }
            Err(err) => {
                debug!(%err, "relay call failed; appending placeholder reply");
                self.conversation
                    .push(ChatMessage::assistant(ERROR_REPLY));
                SubmitOutcome::Failed
            }
        }
    }

    /// Move the recall cursor one step toward the oldest input and load that
    /// input into the draft. Starts at the most recent input; clamps at the
    /// start. No-op when the history is empty.
    pub fn recall_previous(&mut self) {
        if self.input_history.is_empty() {
            return;
        }

        let index = match self.cursor {
            HistoryCursor::NoSelection => self.input_history.len() - 1,
            HistoryCursor::SelectionAt(i) => i.saturating_sub(1),
        };
        self.cursor = HistoryCursor::SelectionAt(index);
        self.draft = self.input_history[index].clone();
    }

    /// Move the recall cursor one step toward the newest input. Walking past
    /// the newest input clears the draft and the selection. No-op when
    /// nothing is selected.
    pub fn recall_next(&mut self) {
        let HistoryCursor::SelectionAt(index) = self.cursor else {
            return;
        };

        let next = index + 1;
        if next >= self.input_history.len() {
            self.cursor = HistoryCursor::NoSelection;
            self.draft.clear();
        } else {
            self.cursor = HistoryCursor::SelectionAt(next);
            self.draft = self.input_history[next].clone();
        }
    }

    #[cfg(test)]
    fn force_pending(&mut self) {
        self.pending = true;
    }
}
