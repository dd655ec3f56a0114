//! Session cookie building and parsing.
//!
//! The token travels as an HTTP-only cookie so page scripts can never read
//! it; `SameSite=Lax` keeps it off cross-site POSTs; `Secure` is appended
//! when the deployment is configured for encrypted transport.

use axum::http::{header, HeaderMap};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "chatbox_session";

/// Build the `Set-Cookie` value that installs a session token.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extract the session token from a request's `Cookie` header(s).
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((name, token)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123", false);
        assert_eq!(
            cookie,
            "chatbox_session=abc123; Path=/; HttpOnly; SameSite=Lax"
        );
        assert!(session_cookie("abc123", true).ends_with("; Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.starts_with("chatbox_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_token_from_single_cookie() {
        let headers = headers_with_cookie("chatbox_session=abc123");
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_token_among_other_cookies() {
        let headers =
            headers_with_cookie("theme=dark; chatbox_session=abc123; lang=en");
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_no_match_for_missing_or_prefixed_names() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = headers_with_cookie("chatbox_session_old=abc123");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_empty_value_treated_as_absent() {
        // The cleared-cookie form round-trips to "no session".
        let headers = headers_with_cookie("chatbox_session=");
        assert_eq!(session_token(&headers), None);
    }
}
