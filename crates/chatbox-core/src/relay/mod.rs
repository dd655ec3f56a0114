//! Chat relay: forwards a client conversation to the upstream completion
//! API and resolves the reply.

pub mod client;
pub mod service;

pub use client::{CompletionClient, CompletionOutcome};
pub use service::{RelayService, FALLBACK_REPLY};
