//! OpenAiCompatClient -- concrete [`CompletionClient`] for any
//! OpenAI-compatible chat-completion API (Together, OpenAI, and friends).
//!
//! One synchronous best-effort call per conversation: no retries, no
//! timeout beyond the transport default. The bearer credential is wrapped
//! in [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

pub mod types;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use chatbox_core::relay::client::{CompletionClient, CompletionOutcome};
use chatbox_types::chat::ChatMessage;
use chatbox_types::error::RelayError;

use self::types::{extract_reply, ChatCompletionRequest, ErrorResponse};

/// Client for `POST {base_url}/v1/chat/completions`.
///
/// Does NOT derive Debug to prevent accidental exposure of internal state
/// including the API key.
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl OpenAiCompatClient {
    /// Create a new client.
    ///
    /// * `api_key` - upstream bearer credential, server-held, never sent to
    ///   browser clients
    /// * `base_url` - API root with no trailing slash
    /// * `model` - fixed model identifier sent with every call
    pub fn new(api_key: SecretString, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    fn url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

impl CompletionClient for OpenAiCompatClient {
    fn name(&self) -> &str {
        "openai_compat"
    }

    async fn complete(
        &self,
        conversation: &[ChatMessage],
    ) -> Result<CompletionOutcome, RelayError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: conversation,
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error: ErrorResponse = response.json().await.unwrap_or_default();
            let message = error.message_or_unknown();
            debug!(%status, message, "upstream returned an error payload");
            return Err(RelayError::Upstream(message));
        }

        // A 2xx body that fails to parse or carries no content is Malformed,
        // not an error: the relay substitutes the fixed fallback reply.
        let payload: Value = match response.json().await {
            Ok(value) => value,
            Err(_) => return Ok(CompletionOutcome::Malformed),
        };

        Ok(match extract_reply(&payload) {
            Some(reply) => CompletionOutcome::Reply(reply),
            None => CompletionOutcome::Malformed,
        })
    }
}
