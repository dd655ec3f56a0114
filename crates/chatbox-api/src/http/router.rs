//! Axum router configuration with middleware.
//!
//! Middleware: CORS (single configured origin with credentials, because the
//! session cookie must survive cross-origin fetches from the browser
//! client) and request tracing.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, allowed_origin: &str) -> anyhow::Result<Router> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid allowed_origin: '{allowed_origin}'"))?;

    // Cookies require a concrete origin; a wildcard would make the browser
    // drop credentialed requests.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::me))
        .route("/logout", post(handlers::auth::logout))
        .route("/chat", post(handlers::chat::relay_chat))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// GET /health - simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use secrecy::SecretString;
    use serde_json::{json, Value};

    use chatbox_core::auth::{AuthService, SessionManager};
    use chatbox_core::relay::RelayService;
    use chatbox_infra::crypto::{Argon2PasswordHasher, OsRngTokenGenerator};
    use chatbox_infra::llm::OpenAiCompatClient;
    use chatbox_infra::store::{InMemoryCredentialStore, InMemorySessionStore};

    /// Stub upstream that always answers with one assistant message.
    async fn spawn_upstream(reply: &str) -> String {
        let payload =
            json!({"choices": [{"message": {"role": "assistant", "content": reply}}]});
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move || {
                let payload = payload.clone();
                async move { axum::Json(payload) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Serve the full router on an ephemeral port and return its base URL.
    async fn spawn_server(upstream_base: String) -> String {
        let auth = AuthService::new(
            InMemoryCredentialStore::new(),
            SessionManager::new(InMemorySessionStore::new(), OsRngTokenGenerator::new()),
            Argon2PasswordHasher::new(),
        );
        let relay = RelayService::new(OpenAiCompatClient::new(
            SecretString::from("test-key"),
            upstream_base,
            "test-model".to_string(),
        ));
        let state = AppState {
            auth: Arc::new(auth),
            relay: Arc::new(relay),
            cookie_secure: false,
        };

        let router = build_router(state, "http://localhost:5173").unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// A cookie-keeping client, standing in for one browser.
    fn browser() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_sets_cookie_that_authorizes_me_and_chat() {
        let upstream = spawn_upstream("hello there").await;
        let base = spawn_server(upstream).await;
        let client = browser();

        let res = client
            .post(format!("{base}/register"))
            .json(&json!({"username": "luna", "password": "hunter2"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 200);
        let set_cookie = res
            .headers()
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(set_cookie.starts_with("chatbox_session="));
        assert!(set_cookie.contains("HttpOnly"));
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Registered");
        assert_eq!(body["username"], "luna");

        // The stored cookie authorizes the session check.
        let res = client.get(format!("{base}/me")).send().await.unwrap();
        assert_eq!(res.status().as_u16(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["username"], "luna");

        // And the relay, end to end through the stub upstream.
        let res = client
            .post(format!("{base}/chat"))
            .json(&json!({"messages": [{"role": "user", "content": "hi"}]}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["reply"], "hello there");
    }

    #[tokio::test]
    async fn test_me_and_chat_reject_callers_without_a_session() {
        let upstream = spawn_upstream("unused").await;
        let base = spawn_server(upstream).await;
        let client = browser();

        let res = client.get(format!("{base}/me")).send().await.unwrap();
        assert_eq!(res.status().as_u16(), 401);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Not authenticated");

        let res = client
            .post(format!("{base}/chat"))
            .json(&json!({"messages": [{"role": "user", "content": "hi"}]}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 401);
    }

    #[tokio::test]
    async fn test_duplicate_register_and_bad_login_map_to_error_statuses() {
        let upstream = spawn_upstream("unused").await;
        let base = spawn_server(upstream).await;
        let client = browser();

        client
            .post(format!("{base}/register"))
            .json(&json!({"username": "luna", "password": "hunter2"}))
            .send()
            .await
            .unwrap();

        let res = client
            .post(format!("{base}/register"))
            .json(&json!({"username": "luna", "password": "other"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 400);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "User exists");

        let res = client
            .post(format!("{base}/login"))
            .json(&json!({"username": "luna", "password": "wrong"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 401);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let upstream = spawn_upstream("unused").await;
        let base = spawn_server(upstream).await;
        let client = browser();

        client
            .post(format!("{base}/register"))
            .json(&json!({"username": "luna", "password": "hunter2"}))
            .send()
            .await
            .unwrap();

        let res = client.post(format!("{base}/logout")).send().await.unwrap();
        assert_eq!(res.status().as_u16(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Logged out");

        // The clearing cookie drops the session from the client store too.
        let res = client.get(format!("{base}/me")).send().await.unwrap();
        assert_eq!(res.status().as_u16(), 401);
    }
}
