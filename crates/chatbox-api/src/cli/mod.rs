//! Terminal chat client.

pub mod chat;
pub mod client;
