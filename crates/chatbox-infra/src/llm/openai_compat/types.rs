//! Wire types for the OpenAI-compatible chat-completion API.
//!
//! The request side is typed strictly; the response side is read leniently
//! from a `serde_json::Value` because the shape is only a convention — a
//! missing `choices[0].message.content` is an expected condition, not a
//! deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use chatbox_types::chat::ChatMessage;

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

/// Error payload an OpenAI-compatible API returns alongside a non-2xx
/// status: `{"error": {"message": "..."}}`. Every field is optional because
/// providers are inconsistent about it.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best-effort human-readable message for the caller.
    pub fn message_or_unknown(self) -> String {
        self.error
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Extract `choices[0].message.content` from a success payload.
///
/// Returns `None` for any shape deviation: no choices, no message, content
/// missing or not a string.
pub fn extract_reply(body: &Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
