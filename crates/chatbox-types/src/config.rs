//! Server configuration for the `chatbox serve` command.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! (or absent) file yields a working local setup. The upstream API key is
//! NOT part of this struct — it is read from the environment at startup and
//! wrapped in `secrecy::SecretString` so it can never be serialized back out.

use serde::{Deserialize, Serialize};

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Browser origin allowed by CORS. Cookies require a concrete origin
    /// with credentials enabled, so this cannot be a wildcard.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Set the `Secure` attribute on session cookies. Enable whenever the
    /// transport is HTTPS.
    #[serde(default)]
    pub cookie_secure: bool,

    /// Upstream chat-completion endpoint settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Upstream chat-completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the OpenAI-compatible API (no trailing slash).
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,

    /// Fixed model identifier sent with every relay call.
    #[serde(default = "default_upstream_model")]
    pub model: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:4000".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_upstream_base_url() -> String {
    "https://api.together.xyz".to_string()
}

fn default_upstream_model() -> String {
    "meta-llama/Llama-3-70b-chat-hf".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origin: default_allowed_origin(),
            cookie_secure: false,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            model: default_upstream_model(),
        }
    }
}

/// Environment variable holding the upstream API bearer credential.
pub const UPSTREAM_API_KEY_ENV: &str = "CHATBOX_UPSTREAM_API_KEY";
