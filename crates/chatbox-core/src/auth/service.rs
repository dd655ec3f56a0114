//! Auth service orchestrating registration, login, session checks, and
//! logout against the credential store and session manager.

use chatbox_types::auth::UserRecord;
use chatbox_types::error::AuthError;
use tracing::info;

use crate::auth::credentials::{CredentialStore, PasswordHasher};
use crate::auth::sessions::{SessionManager, SessionStore, TokenGenerator};

/// An authenticated principal plus the session token that proves it.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub username: String,
    pub token: String,
}

/// Orchestrates registration and login against the credential store and
/// session manager, and exposes session check/destroy.
///
/// Generic over the store, hasher, and token seams so tests can pin cheap
/// fakes (the real Argon2 hasher is deliberately slow).
pub struct AuthService<C, S, G, H>
where
    C: CredentialStore,
    S: SessionStore,
    G: TokenGenerator,
    H: PasswordHasher,
{
    credentials: C,
    sessions: SessionManager<S, G>,
    hasher: H,
}

impl<C, S, G, H> AuthService<C, S, G, H>
where
    C: CredentialStore,
    S: SessionStore,
    G: TokenGenerator,
    H: PasswordHasher,
{
    pub fn new(credentials: C, sessions: SessionManager<S, G>, hasher: H) -> Self {
        Self {
            credentials,
            sessions,
            hasher,
        }
    }

    /// Register a new account and immediately authenticate it.
    ///
    /// Fails with `UsernameTaken` when a record for the (case-sensitive)
    /// username already exists. The hash is computed before the insert so
    /// the store's atomic check-then-insert is the only synchronization
    /// point: two racing registrations of the same username resolve to
    /// exactly one winner.
    pub fn register(&self, username: &str, password: &str) -> Result<AuthenticatedSession, AuthError> {
        let password_hash = self.hasher.hash(password)?;
        let record = UserRecord {
            username: username.to_string(),
            password_hash,
        };

        if !self.credentials.insert_if_absent(record) {
            return Err(AuthError::UsernameTaken);
        }

        let token = self.sessions.create(username);
        info!(username, "user registered");
        Ok(AuthenticatedSession {
            username: username.to_string(),
            token,
        })
    }

    /// Verify credentials and create a session.
    ///
    /// Unknown username and wrong password fail with the same error so the
    /// response cannot be used to enumerate accounts.
    pub fn login(&self, username: &str, password: &str) -> Result<AuthenticatedSession, AuthError> {
        let verified = self
            .credentials
            .password_hash(username)
            .is_some_and(|hash| self.hasher.verify(password, &hash));

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.create(username);
        info!(username, "user logged in");
        Ok(AuthenticatedSession {
            username: username.to_string(),
            token,
        })
    }

    /// Resolve a session token to its username.
    pub fn whoami(&self, token: &str) -> Result<String, AuthError> {
        self.sessions
            .lookup(token)
            .ok_or(AuthError::Unauthenticated)
    }

    /// Destroy the caller's session. Always succeeds, with or without an
    /// active session.
    pub fn logout(&self, token: Option<&str>) {
        if let Some(token) = token {
            self.sessions.destroy(token);
        }
    }
}
