//! JSON endpoints for script clients. Every POST requires the
//! `x-csrf-token` header from `GET /api/v1/session`.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared_types::{
    messages, AppError, LookupRequest, LookupResponse, MessageResponse, PasswordCheckRequest,
    SessionInfo,
};

use crate::auth::extractors::CsrfVerified;
use crate::auth::gate::{self, RequestContext};
use crate::error_convert::ValidateRequest;
use crate::lookup::run_lookup;
use crate::AppState;

/// GET /api/v1/session
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Current session and its anti-forgery token", body = SessionInfo)
    ),
    tag = "session"
)]
pub async fn session(ctx: RequestContext) -> Json<SessionInfo> {
    Json(SessionInfo {
        authenticated: ctx.is_authenticated(),
        csrf_token: ctx.csrf_token,
    })
}

/// POST /api/v1/access
///
/// Check the shared access password. Unlimited attempts.
#[utoipa::path(
    post,
    path = "/api/v1/access",
    request_body = PasswordCheckRequest,
    params(
        ("x-csrf-token" = String, Header, description = "Anti-forgery token")
    ),
    responses(
        (status = 200, description = "Access granted", body = MessageResponse),
        (status = 401, description = "Incorrect password", body = AppError),
        (status = 403, description = "Missing or stale anti-forgery token", body = AppError),
        (status = 422, description = "Empty password", body = AppError),
        (status = 503, description = "No access password configured", body = AppError)
    ),
    tag = "session"
)]
pub async fn access(
    State(state): State<AppState>,
    CsrfVerified(ctx): CsrfVerified,
    Json(body): Json<PasswordCheckRequest>,
) -> Result<impl IntoResponse, AppError> {
    body.validate_request()?;
    let headers = gate::sign_in(
        &state.config,
        &state.settings.snapshot(),
        &ctx,
        &body.password,
    )?;
    Ok((headers, Json(MessageResponse::new(messages::ACCESS_GRANTED))))
}

/// POST /api/v1/lookup
#[utoipa::path(
    post,
    path = "/api/v1/lookup",
    request_body = LookupRequest,
    params(
        ("x-csrf-token" = String, Header, description = "Anti-forgery token")
    ),
    responses(
        (status = 200, description = "Lookup result", body = LookupResponse),
        (status = 401, description = "Access password not entered", body = AppError),
        (status = 403, description = "Missing or stale anti-forgery token", body = AppError),
        (status = 422, description = "Empty address", body = AppError)
    ),
    tag = "lookup"
)]
pub async fn lookup(
    State(state): State<AppState>,
    CsrfVerified(ctx): CsrfVerified,
    Json(body): Json<LookupRequest>,
) -> Result<Json<LookupResponse>, AppError> {
    let resolver = state.address_resolver();
    let buildings = state.building_source();
    let response = run_lookup(&ctx, &resolver, &buildings, &body.to_query()).await?;
    Ok(Json(response))
}

/// POST /api/v1/sign-out
#[utoipa::path(
    post,
    path = "/api/v1/sign-out",
    params(
        ("x-csrf-token" = String, Header, description = "Anti-forgery token")
    ),
    responses(
        (status = 204, description = "Signed out"),
        (status = 403, description = "Missing or stale anti-forgery token", body = AppError)
    ),
    tag = "session"
)]
pub async fn sign_out(
    State(state): State<AppState>,
    CsrfVerified(ctx): CsrfVerified,
) -> Result<impl IntoResponse, AppError> {
    let headers = gate::sign_out(&state.config, &ctx)?;
    Ok((StatusCode::NO_CONTENT, headers))
}
