//! The access gate: a two-state machine driven by the shared password.

use axum::http::HeaderMap;
use shared_types::{messages, AppError, Settings};

use super::{cookies, csrf, password, session};
use crate::config::ServerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    Authenticated,
}

impl AccessState {
    pub fn from_flag(authenticated: bool) -> Self {
        if authenticated {
            AccessState::Authenticated
        } else {
            AccessState::Unauthenticated
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == AccessState::Authenticated
    }
}

/// Per-request view of the visitor's session, inserted by
/// [`super::middleware::session_middleware`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub session_id: String,
    pub access: AccessState,
    pub csrf_token: String,
}

impl RequestContext {
    pub fn new(session_id: impl Into<String>, access: AccessState, secret: &[u8]) -> Self {
        let session_id = session_id.into();
        let csrf_token = csrf::csrf_token(secret, &session_id);
        Self {
            session_id,
            access,
            csrf_token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access.is_authenticated()
    }

    /// Reject a form or script submission whose anti-forgery token does not
    /// belong to this session.
    pub fn verify_csrf(&self, secret: &[u8], submitted: Option<&str>) -> Result<(), AppError> {
        match submitted {
            Some(token) if csrf::verify_csrf(secret, &self.session_id, token) => Ok(()),
            _ => {
                tracing::warn!(session_id = %self.session_id, "Anti-forgery token rejected");
                Err(AppError::forbidden(messages::FORM_EXPIRED))
            }
        }
    }
}

/// Compare a submitted password against the configured hash.
///
/// There is no lockout; every attempt is checked the same way.
pub fn check_password(settings: &Settings, submitted: &str) -> Result<(), AppError> {
    let Some(hash) = settings.password_hash() else {
        return Err(AppError::not_configured(messages::NOT_CONFIGURED));
    };

    match password::verify_password(submitted, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::unauthorized(messages::INCORRECT_PASSWORD)),
        Err(e) => {
            tracing::error!(error = %e, "Stored access password hash is malformed");
            Err(AppError::not_configured(messages::NOT_CONFIGURED))
        }
    }
}

/// Headers carrying a freshly signed session cookie for `session_id`.
pub fn session_headers(
    config: &ServerConfig,
    session_id: &str,
    access: AccessState,
) -> Result<HeaderMap, AppError> {
    let token = session::issue_session_token(
        &config.session_secret,
        session_id,
        access.is_authenticated(),
        config.session_ttl_minutes,
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AppError::internal("Failed to start session")
    })?;

    let mut headers = HeaderMap::new();
    cookies::set_session_cookie(
        &mut headers,
        &token,
        config.session_ttl_minutes,
        config.cookie_secure,
    );
    Ok(headers)
}

/// Unauthenticated -> Authenticated. The session id is kept so the
/// anti-forgery token already in the page stays valid.
pub fn sign_in(
    config: &ServerConfig,
    settings: &Settings,
    ctx: &RequestContext,
    submitted: &str,
) -> Result<HeaderMap, AppError> {
    if let Err(e) = check_password(settings, submitted) {
        tracing::info!(session_id = %ctx.session_id, kind = %e.kind, "Access denied");
        return Err(e);
    }
    tracing::info!(session_id = %ctx.session_id, "Access granted");
    session_headers(config, &ctx.session_id, AccessState::Authenticated)
}

/// Authenticated -> Unauthenticated.
pub fn sign_out(config: &ServerConfig, ctx: &RequestContext) -> Result<HeaderMap, AppError> {
    tracing::info!(session_id = %ctx.session_id, "Signed out");
    session_headers(config, &ctx.session_id, AccessState::Unauthenticated)
}
