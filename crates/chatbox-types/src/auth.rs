//! Auth request/response bodies and session data shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /register` and `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response body for successful register/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub username: String,
}

/// Response body for `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub username: String,
}

/// Response body for `POST /logout` (and error bodies carrying a message).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A stored credential record.
///
/// Created on registration, never mutated, never deleted (there is no
/// account-deletion path). The plaintext password is hashed before this
/// record exists and is never retained.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// Server-side session state bound to a token.
///
/// The token itself is the map key in the session store; it never appears
/// inside the record so that log output of a record cannot leak it.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            created_at: Utc::now(),
        }
    }
}
