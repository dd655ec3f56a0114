//! Application error type mapping to HTTP status codes and body shapes.
//!
//! Auth failures render as `{"message": "..."}`; relay failures render as
//! `{"reply": "..."}` so the chat UI can show the error string in place of
//! an assistant turn. No error here is fatal to the process — each request's
//! failure is isolated to its own response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use chatbox_types::auth::MessageResponse;
use chatbox_types::chat::ChatReply;
use chatbox_types::error::{AuthError, RelayError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Authentication or session failure.
    Auth(AuthError),
    /// Upstream relay failure.
    Relay(RelayError),
    /// Generic internal error.
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Auth(e) => {
                let status = match e {
                    AuthError::UsernameTaken => StatusCode::BAD_REQUEST,
                    AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                        StatusCode::UNAUTHORIZED
                    }
                    AuthError::Hashing => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = Json(MessageResponse {
                    message: e.to_string(),
                });
                (status, body).into_response()
            }
            AppError::Relay(e) => {
                // The error string stands in for the reply; the client
                // renders it as a transcript entry.
                let body = Json(ChatReply {
                    reply: e.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse { message }),
            )
                .into_response(),
        }
    }
}
