//! Shared domain types for Chatbox.
//!
//! This crate holds the data shapes exchanged between the HTTP layer, the
//! core services, and the infrastructure implementations: chat messages and
//! wire DTOs, auth request/response bodies, configuration, and the error
//! taxonomy. It has no business logic and no I/O.

pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
