use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies;
use super::gate::{AccessState, RequestContext};
use super::session;
use crate::AppState;

/// Permissive session middleware.
///
/// On each request:
/// 1. Validates the session cookie, minting a new anonymous session when it
///    is missing, forged or expired
/// 2. Inserts a [`RequestContext`] for handlers and extractors
/// 3. Sets the cookie for a newly minted session, unless the handler already
///    set one
///
/// Does NOT reject anything; handlers decide what requires access.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let secret = &state.config.session_secret;

    let existing = cookies::extract_session_token(req.headers())
        .and_then(|token| session::validate_session_token(secret, &token).ok());

    let (session_id, access, fresh) = match existing {
        Some(claims) => (claims.sid, AccessState::from_flag(claims.auth), false),
        None => (session::new_session_id(), AccessState::Unauthenticated, true),
    };

    let ctx = RequestContext::new(session_id, access, secret);
    req.extensions_mut().insert(ctx.clone());

    let mut response = next.run(req).await;

    if fresh && !response.headers().contains_key(header::SET_COOKIE) {
        match session::issue_session_token(
            secret,
            &ctx.session_id,
            false,
            state.config.session_ttl_minutes,
        ) {
            Ok(token) => cookies::set_session_cookie(
                response.headers_mut(),
                &token,
                state.config.session_ttl_minutes,
                state.config.cookie_secure,
            ),
            Err(e) => tracing::error!(error = %e, "Failed to sign anonymous session"),
        }
    }

    response
}
