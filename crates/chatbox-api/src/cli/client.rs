//! HTTP client for a running chatbox server.
//!
//! Keeps the session cookie in reqwest's cookie store, so one `ApiClient`
//! is a single authenticated browser context. Implements [`TurnRelay`] so
//! the conversation controller can drive `/chat` directly.

use anyhow::Context;
use serde_json::json;

use chatbox_core::conversation::TurnRelay;
use chatbox_types::auth::{AuthResponse, MessageResponse, WhoAmIResponse};
use chatbox_types::chat::{ChatMessage, ChatReply, ChatRequest};
use chatbox_types::error::RelayError;

/// Cookie-persisting client for the chatbox HTTP API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /me - returns the logged-in username, or None without a session.
    pub async fn me(&self) -> anyhow::Result<Option<String>> {
        let response = self.http.get(self.url("/me")).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body: WhoAmIResponse = response.json().await?;
        Ok(Some(body.username))
    }

    /// POST /register - create an account; the session cookie lands in the
    /// cookie store.
    pub async fn register(&self, username: &str, password: &str) -> anyhow::Result<String> {
        self.auth_call("/register", username, password).await
    }

    /// POST /login.
    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<String> {
        self.auth_call("/login", username, password).await
    }

    /// POST /logout - always succeeds server-side.
    pub async fn logout(&self) -> anyhow::Result<()> {
        self.http.post(self.url("/logout")).send().await?;
        Ok(())
    }

    async fn auth_call(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .http
            .post(self.url(path))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;

        if response.status().is_success() {
            let body: AuthResponse = response.json().await?;
            Ok(body.username)
        } else {
            let body: MessageResponse = response.json().await.unwrap_or(MessageResponse {
                message: "Request failed".to_string(),
            });
            anyhow::bail!("{}", body.message)
        }
    }
}

impl TurnRelay for ApiClient {
    async fn send(&self, conversation: &[ChatMessage]) -> Result<String, RelayError> {
        let request = ChatRequest {
            messages: conversation.to_vec(),
        };

        let response = self
            .http
            .post(self.url("/chat"))
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Unavailable(e.to_string()))?;

        // The server answers {"reply": ...} on success AND on relay failure
        // (the error string takes the reply's place); both belong in the
        // transcript, so status is deliberately not checked here.
        let body: ChatReply = response
            .json()
            .await
            .map_err(|e| RelayError::Unavailable(e.to_string()))?;
        Ok(body.reply)
    }
}
