//! Business logic for Chatbox.
//!
//! This crate defines the service layer and the trait seams it depends on:
//! credential storage, password hashing, session storage, token generation,
//! and the upstream completion client. Concrete implementations live in
//! `chatbox-infra` (chatbox-core never depends on chatbox-infra).
//!
//! It also owns the client-side conversation controller — the state machine
//! behind the chat UI's transcript, pending flag, and input-recall buffer.

pub mod auth;
pub mod conversation;
pub mod relay;
