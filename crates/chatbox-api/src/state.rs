//! Application state wiring the services together.
//!
//! Services are generic over store/hasher/client traits, but AppState pins
//! them to the concrete infra implementations. All state is in-memory; a
//! restart invalidates every account and session by design.

use std::sync::Arc;

use anyhow::anyhow;
use secrecy::SecretString;

use chatbox_core::auth::{AuthService, SessionManager};
use chatbox_core::relay::RelayService;
use chatbox_infra::crypto::{Argon2PasswordHasher, OsRngTokenGenerator};
use chatbox_infra::llm::OpenAiCompatClient;
use chatbox_infra::store::{InMemoryCredentialStore, InMemorySessionStore};
use chatbox_types::config::{ServerConfig, UPSTREAM_API_KEY_ENV};

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService = AuthService<
    InMemoryCredentialStore,
    InMemorySessionStore,
    OsRngTokenGenerator,
    Argon2PasswordHasher,
>;

pub type ConcreteRelayService = RelayService<OpenAiCompatClient>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<ConcreteAuthService>,
    pub relay: Arc<ConcreteRelayService>,
    pub cookie_secure: bool,
}

impl AppState {
    /// Wire the services from config plus the environment-held upstream key.
    pub fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        let api_key = std::env::var(UPSTREAM_API_KEY_ENV)
            .map(SecretString::from)
            .map_err(|_| {
                anyhow!("{UPSTREAM_API_KEY_ENV} is not set; the relay needs an upstream credential")
            })?;

        let auth = AuthService::new(
            InMemoryCredentialStore::new(),
            SessionManager::new(InMemorySessionStore::new(), OsRngTokenGenerator::new()),
            Argon2PasswordHasher::new(),
        );

        let relay = RelayService::new(OpenAiCompatClient::new(
            api_key,
            config.upstream.base_url.clone(),
            config.upstream.model.clone(),
        ));

        Ok(Self {
            auth: Arc::new(auth),
            relay: Arc::new(relay),
            cookie_secure: config.cookie_secure,
        })
    }
}
