use thiserror::Error;

/// Errors from authentication and session operations.
///
/// `InvalidCredentials` is deliberately a single variant for both "unknown
/// username" and "wrong password" so the two cases are indistinguishable to
/// the caller (enumeration resistance).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User exists")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("credential hashing failed")]
    Hashing,
}

/// Errors from the chat relay's upstream call.
///
/// The `Display` strings double as the `reply` text shown in the chat
/// transcript when a relay call fails, so they are written for end users.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream reachable but returned an error payload.
    #[error("AI API error: {0}")]
    Upstream(String),

    /// Upstream unreachable (network/transport failure).
    #[error("Error contacting AI API.")]
    Unavailable(String),
}
