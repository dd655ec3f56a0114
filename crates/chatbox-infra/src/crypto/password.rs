//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `chatbox-core` using the
//! `argon2` crate (RustCrypto ecosystem). Hashes are PHC strings, so the
//! salt and parameters travel with the hash and verification needs no
//! out-of-band state.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier as _};

use chatbox_core::auth::credentials::PasswordHasher;
use chatbox_types::error::AuthError;

/// Argon2id implementation of `PasswordHasher`.
///
/// Uses the crate's default parameters (Argon2id v19). Hashing is CPU-bound
/// by design; callers on an async runtime should run it on the blocking
/// pool.
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, raw_password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(raw_password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::Hashing)
    }

    fn verify(&self, raw_password: &str, password_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(raw_password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();
        assert!(hasher.verify("hunter2", &hash));
        assert!(!hasher.verify("hunter3", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("hunter2").unwrap();
        let second = hasher.hash("hunter2").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("very-distinctive-password").unwrap();
        assert!(!hash.contains("very-distinctive-password"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_tolerates_garbage_hash() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify("hunter2", "not a phc string"));
        assert!(!hasher.verify("hunter2", ""));
    }
}
