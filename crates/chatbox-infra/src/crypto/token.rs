//! Session token generation from the OS CSPRNG.

use argon2::password_hash::rand_core::{OsRng, RngCore};

use chatbox_core::auth::sessions::TokenGenerator;

/// Generates opaque session tokens: 32 bytes from the OS CSPRNG, hex
/// encoded (64 chars). The token carries no structure and no timestamp, so
/// it is unguessable at rest.
pub struct OsRngTokenGenerator;

impl OsRngTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRngTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGenerator for OsRngTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_64_lowercase_hex_chars() {
        let token = OsRngTokenGenerator::new().generate();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(token.chars().all(|c| !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens = OsRngTokenGenerator::new();
        let a = tokens.generate();
        let b = tokens.generate();
        assert_ne!(a, b);
    }
}
