use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use shared_types::AppError;

use super::csrf::{secrets_match, CSRF_HEADER};
use super::gate::RequestContext;
use crate::AppState;

/// The session context inserted by the session middleware.
impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestContext>().cloned().ok_or_else(|| {
            tracing::error!("RequestContext missing; is the session middleware installed?");
            AppError::internal("Session unavailable")
        })
    }
}

/// Extractor for script clients: the anti-forgery token must arrive in the
/// `x-csrf-token` header. Returns 403 otherwise.
pub struct CsrfVerified(pub RequestContext);

impl FromRequestParts<AppState> for CsrfVerified {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = RequestContext::from_request_parts(parts, state).await?;
        let submitted = parts
            .headers
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok());
        ctx.verify_csrf(&state.config.session_secret, submitted)?;
        Ok(CsrfVerified(ctx))
    }
}

/// Extractor for the admin settings API: `Authorization: Bearer <ADMIN_TOKEN>`.
///
/// When no admin token is configured the API does not exist (404).
pub struct AdminRequired;

impl FromRequestParts<AppState> for AdminRequired {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Err(AppError::not_found("Not found"));
        };

        let presented = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match presented {
            Some(token) if secrets_match(&state.config.session_secret, expected, token) => {
                Ok(AdminRequired)
            }
            Some(_) => Err(AppError::forbidden("Invalid admin token")),
            None => Err(AppError::unauthorized("Admin token required")),
        }
    }
}
