use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;

pub const SESSION_COOKIE: &str = "plu_session";

/// Build a Set-Cookie header value carrying the session token.
///
/// Returns `None` only if the token contains bytes that cannot appear in a
/// header, which a signed JWT never does.
pub fn build_session_cookie(token: &str, max_age_minutes: i64, secure: bool) -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes.saturating_mul(60)))
        .secure(secure)
        .build();

    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Append the session cookie to a response's headers.
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str, max_age_minutes: i64, secure: bool) {
    match build_session_cookie(token, max_age_minutes, secure) {
        Some(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        None => tracing::error!("Session token is not a valid header value"),
    }
}

pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, SESSION_COOKIE)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}
