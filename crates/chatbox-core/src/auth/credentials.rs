//! Credential store and password hasher trait seams.
//!
//! The credential store owns the username -> password-hash mapping
//! exclusively; no other component reads or writes it. Implementations are
//! in-memory only — there is no durability goal, a restart drops all
//! accounts.

use chatbox_types::auth::UserRecord;
use chatbox_types::error::AuthError;

/// Storage for credential records, keyed by case-sensitive username.
pub trait CredentialStore: Send + Sync {
    /// Insert a record only if the username is free.
    ///
    /// Returns `false` when a record already exists. The check and the
    /// insert must be atomic with respect to the username key: when two
    /// callers race on the same username, exactly one sees `true`.
    fn insert_if_absent(&self, record: UserRecord) -> bool;

    /// Look up the stored password hash for a username.
    fn password_hash(&self, username: &str) -> Option<String>;
}

/// One-way salted password hashing.
///
/// Implementations live in chatbox-infra (Argon2id). The trait exists so the
/// auth service and its tests never depend on a concrete KDF.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password into a self-describing hash string.
    fn hash(&self, raw_password: &str) -> Result<String, AuthError>;

    /// Verify a raw password against a stored hash.
    ///
    /// Returns `false` for both a mismatch and an unparseable hash; the
    /// caller reports a uniform `InvalidCredentials` either way.
    fn verify(&self, raw_password: &str, password_hash: &str) -> bool;
}
