//! Auth HTTP handlers.
//!
//! Endpoints:
//! - POST /register - create an account; caller is authenticated as a side effect
//! - POST /login    - verify credentials, issue a session
//! - GET  /me       - resolve the session cookie to a username
//! - POST /logout   - destroy the session; always succeeds

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;

use chatbox_core::auth::service::AuthenticatedSession;
use chatbox_types::auth::{AuthResponse, Credentials, MessageResponse, WhoAmIResponse};

use crate::http::cookie;
use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::state::AppState;

/// Attach the session cookie to a successful auth response.
fn auth_success(
    message: &str,
    session: AuthenticatedSession,
    secure: bool,
) -> impl IntoResponse {
    (
        AppendHeaders([(
            header::SET_COOKIE,
            cookie::session_cookie(&session.token, secure),
        )]),
        Json(AuthResponse {
            message: message.to_string(),
            username: session.username,
        }),
    )
}

/// POST /register - create an account and authenticate the caller.
pub async fn register(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    // Argon2 hashing is CPU-bound; keep it off the async workers.
    let auth = state.auth.clone();
    let session = tokio::task::spawn_blocking(move || {
        auth.register(&creds.username, &creds.password)
    })
    .await
    .map_err(|e| AppError::Internal(format!("hashing task failed: {e}")))??;

    Ok(auth_success("Registered", session, state.cookie_secure))
}

/// POST /login - verify credentials and issue a fresh session.
pub async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    let auth = state.auth.clone();
    let session = tokio::task::spawn_blocking(move || {
        auth.login(&creds.username, &creds.password)
    })
    .await
    .map_err(|e| AppError::Internal(format!("hashing task failed: {e}")))??;

    Ok(auth_success("Logged in", session, state.cookie_secure))
}

/// GET /me - session check.
pub async fn me(user: CurrentUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        username: user.username,
    })
}

/// POST /logout - destroy the caller's session unconditionally.
///
/// Succeeds with or without an active session, and clears the cookie either
/// way.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    state.auth.logout(cookie::session_token(&headers).as_deref());
    (
        AppendHeaders([(
            header::SET_COOKIE,
            cookie::clear_session_cookie(state.cookie_secure),
        )]),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
