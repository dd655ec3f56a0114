//! Infrastructure implementations for Chatbox.
//!
//! Implements the trait seams defined in `chatbox-core`: in-memory
//! credential and session stores (DashMap), Argon2id password hashing and
//! OS-RNG token generation (RustCrypto ecosystem), and the reqwest-based
//! client for the upstream OpenAI-compatible chat-completion API.

pub mod crypto;
pub mod llm;
pub mod store;
