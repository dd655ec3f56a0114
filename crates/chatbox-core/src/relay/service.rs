//! Relay service: one best-effort pass-through per request.

use chatbox_types::chat::ChatMessage;
use chatbox_types::error::RelayError;
use tracing::warn;

use crate::relay::client::{CompletionClient, CompletionOutcome};

/// Substituted for the assistant reply when upstream answers successfully
/// but the payload carries no usable content.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a reply.";

/// Forwards conversations to the upstream completion client and folds the
/// outcome into a single reply string.
///
/// Authentication is enforced by the HTTP layer before this service is
/// reached; the relay itself holds no session state and no shared locks
/// across the upstream await.
pub struct RelayService<P: CompletionClient> {
    client: P,
}

impl<P: CompletionClient> RelayService<P> {
    pub fn new(client: P) -> Self {
        Self { client }
    }

    /// Relay the full conversation and return the assistant's reply.
    ///
    /// A malformed upstream payload yields the fixed fallback string rather
    /// than failing the call; HTTP-level and transport-level failures
    /// propagate as `RelayError`.
    pub async fn relay(&self, conversation: &[ChatMessage]) -> Result<String, RelayError> {
        match self.client.complete(conversation).await? {
            CompletionOutcome::Reply(text) => Ok(text),
            CompletionOutcome::Malformed => {
                warn!(client = self.client.name(), "upstream payload had no usable content");
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }
}
