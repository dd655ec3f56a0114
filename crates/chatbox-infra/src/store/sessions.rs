//! In-memory session store.

use dashmap::DashMap;
use tracing::debug;

use chatbox_core::auth::sessions::SessionStore;
use chatbox_types::auth::SessionRecord;

/// DashMap-backed token -> session mapping.
///
/// Values are cloned on read; no `DashMap` guard is held after a call
/// returns, so lookups never block across an await elsewhere.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionRecord>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, token: String, record: SessionRecord) {
        self.sessions.insert(token, record);
    }

    fn username(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|r| r.username.clone())
    }

    fn remove(&self, token: &str) {
        if let Some((_, record)) = self.sessions.remove(token) {
            let age = chrono_age_secs(&record);
            debug!(username = %record.username, age_secs = age, "session destroyed");
        }
    }
}

fn chrono_age_secs(record: &SessionRecord) -> i64 {
    (chrono::Utc::now() - record.created_at).num_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_lookup_remove() {
        let store = InMemorySessionStore::new();
        store.insert("tok-1".to_string(), SessionRecord::new("luna"));

        assert_eq!(store.username("tok-1"), Some("luna".to_string()));
        store.remove("tok-1");
        assert_eq!(store.username("tok-1"), None);
    }

    #[test]
    fn test_remove_unknown_token_is_noop() {
        let store = InMemorySessionStore::new();
        store.remove("never-issued");
    }

    #[test]
    fn test_tokens_map_to_independent_sessions() {
        let store = InMemorySessionStore::new();
        store.insert("tok-1".to_string(), SessionRecord::new("luna"));
        store.insert("tok-2".to_string(), SessionRecord::new("milo"));

        store.remove("tok-1");
        assert_eq!(store.username("tok-2"), Some("milo".to_string()));
    }
}
