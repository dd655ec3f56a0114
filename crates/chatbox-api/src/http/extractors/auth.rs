//! Session authentication extractor.
//!
//! Resolves the session cookie to a username through the auth service.
//! Handlers that take a [`CurrentUser`] reject unauthenticated callers with
//! 401 before any of their own logic runs — the relay handler in particular
//! never reaches upstream without a valid session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::http::cookie;
use crate::http::error::AppError;
use crate::state::AppState;

/// The authenticated caller. Extracting this validates the session cookie.
pub struct CurrentUser {
    pub username: String,
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = cookie::session_token(&parts.headers)
            .ok_or(AppError::Auth(chatbox_types::error::AuthError::Unauthenticated))?;
        let username = state.auth.whoami(&token)?;
        Ok(CurrentUser { username, token })
    }
}
