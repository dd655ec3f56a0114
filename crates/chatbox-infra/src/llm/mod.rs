//! Upstream chat-completion client.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatClient;
