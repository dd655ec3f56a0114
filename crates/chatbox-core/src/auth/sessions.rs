//! Session lifecycle: token generation, the token -> username mapping, and
//! the manager that owns both.
//!
//! A session has exactly two states: Absent and Active. `create` moves it to
//! Active, `destroy` (or a process restart) back to Absent. The manager owns
//! the mapping exclusively — callers never touch the store directly.

use chatbox_types::auth::SessionRecord;
use tracing::debug;

/// Storage for the token -> session mapping.
pub trait SessionStore: Send + Sync {
    fn insert(&self, token: String, record: SessionRecord);

    /// Resolve a token to its username, if the session is active.
    fn username(&self, token: &str) -> Option<String>;

    /// Remove a session. Removing a nonexistent token is not an error.
    fn remove(&self, token: &str);
}

/// Source of opaque, cryptographically unguessable session tokens.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Owns session creation, lookup, and destruction.
pub struct SessionManager<S: SessionStore, G: TokenGenerator> {
    store: S,
    tokens: G,
}

impl<S: SessionStore, G: TokenGenerator> SessionManager<S, G> {
    pub fn new(store: S, tokens: G) -> Self {
        Self { store, tokens }
    }

    /// Create a session for `username` and return its token.
    ///
    /// Every call issues a fresh token; re-login does not reuse or rotate an
    /// existing session, it simply adds a new one.
    pub fn create(&self, username: &str) -> String {
        let token = self.tokens.generate();
        self.store
            .insert(token.clone(), SessionRecord::new(username));
        debug!(username, "session created");
        token
    }

    /// Resolve a token to the username it is bound to.
    pub fn lookup(&self, token: &str) -> Option<String> {
        self.store.username(token)
    }

    /// Destroy a session. Idempotent: destroying an unknown token is a no-op.
    pub fn destroy(&self, token: &str) {
        self.store.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashmap::DashMap;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct MapStore(DashMap<String, SessionRecord>);

    impl SessionStore for MapStore {
        fn insert(&self, token: String, record: SessionRecord) {
            self.0.insert(token, record);
        }
        fn username(&self, token: &str) -> Option<String> {
            self.0.get(token).map(|r| r.username.clone())
        }
        fn remove(&self, token: &str) {
            self.0.remove(token);
        }
    }

    struct SequentialTokens(AtomicU64);

    impl TokenGenerator for SequentialTokens {
        fn generate(&self) -> String {
            format!("token-{}", self.0.fetch_add(1, Ordering::Relaxed))
        }
    }

    fn manager() -> SessionManager<MapStore, SequentialTokens> {
        SessionManager::new(MapStore(DashMap::new()), SequentialTokens(AtomicU64::new(0)))
    }

    #[test]
    fn test_create_then_lookup() {
        let sessions = manager();
        let token = sessions.create("luna");
        assert_eq!(sessions.lookup(&token), Some("luna".to_string()));
    }

    #[test]
    fn test_destroy_moves_session_to_absent() {
        let sessions = manager();
        let token = sessions.create("luna");
        sessions.destroy(&token);
        assert_eq!(sessions.lookup(&token), None);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let sessions = manager();
        let token = sessions.create("luna");
        sessions.destroy(&token);
        sessions.destroy(&token);
        sessions.destroy("never-issued");
        assert_eq!(sessions.lookup(&token), None);
    }

    #[test]
    fn test_each_create_issues_a_fresh_token() {
        let sessions = manager();
        let first = sessions.create("luna");
        let second = sessions.create("luna");
        assert_ne!(first, second);
        // Both sessions are independently active.
        assert_eq!(sessions.lookup(&first), Some("luna".to_string()));
        assert_eq!(sessions.lookup(&second), Some("luna".to_string()));
    }
}
