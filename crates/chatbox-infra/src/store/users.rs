//! In-memory credential store.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use chatbox_core::auth::credentials::CredentialStore;
use chatbox_types::auth::UserRecord;

/// DashMap-backed credential store keyed by case-sensitive username.
///
/// The entry API holds the shard lock across the vacancy check and the
/// insert, so concurrent registrations racing on the same username resolve
/// to exactly one winner — no check-then-insert window.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    users: DashMap<String, UserRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn insert_if_absent(&self, record: UserRecord) -> bool {
        match self.users.entry(record.username.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    fn password_hash(&self, username: &str) -> Option<String> {
        self.users.get(username).map(|r| r.password_hash.clone())
    }
}
