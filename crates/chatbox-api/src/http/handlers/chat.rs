//! Chat relay HTTP handler.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use chatbox_types::chat::{ChatReply, ChatRequest};

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::state::AppState;

/// POST /chat - forward the full conversation upstream, return one reply.
///
/// The server stores no history: each call carries the ordered conversation
/// and yields exactly one assistant message. The `CurrentUser` extractor
/// rejects unauthenticated callers before the upstream call is made.
pub async fn relay_chat(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    debug!(
        username = %user.username,
        turns = request.messages.len(),
        "relaying conversation upstream"
    );
    let reply = state.relay.relay(&request.messages).await?;
    Ok(Json(ChatReply { reply }))
}
