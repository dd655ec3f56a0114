//! CompletionClient trait definition.
//!
//! The seam between the relay service and the upstream chat-completion API.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition). The concrete
//! implementation lives in chatbox-infra.

use chatbox_types::chat::ChatMessage;
use chatbox_types::error::RelayError;

/// Result of one upstream completion call, resolved once at the boundary.
///
/// `Malformed` covers a 2xx response whose body does not carry
/// `choices[0].message.content` — downstream code never pattern-matches on
/// optional nested fields, it only sees this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The first completion's text content.
    Reply(String),
    /// Upstream answered successfully but the payload shape was unexpected.
    Malformed,
}

/// Client for an upstream chat-completion endpoint.
///
/// One synchronous best-effort call: no retries, no timeout beyond the
/// transport default. The upstream credential is held by the implementation
/// and never exposed to callers.
pub trait CompletionClient: Send + Sync {
    /// Human-readable client name for log output.
    fn name(&self) -> &str;

    /// Forward the full ordered conversation and return the outcome.
    fn complete(
        &self,
        conversation: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<CompletionOutcome, RelayError>> + Send;
}
