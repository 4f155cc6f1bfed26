use axum::{extract::State, Json};
use shared_types::{AppError, SettingsView, UpdateSettingsRequest};

use crate::auth::extractors::AdminRequired;
use crate::error_convert::ValidateRequest;
use crate::AppState;

/// GET /api/v1/admin/settings
///
/// Current settings with secrets reduced to presence flags.
#[utoipa::path(
    get,
    path = "/api/v1/admin/settings",
    params(
        ("Authorization" = String, Header, description = "Bearer admin token")
    ),
    responses(
        (status = 200, description = "Redacted settings", body = SettingsView),
        (status = 401, description = "Admin token missing", body = AppError),
        (status = 403, description = "Admin token invalid", body = AppError),
        (status = 404, description = "Admin API disabled", body = AppError)
    ),
    tag = "admin"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    _admin: AdminRequired,
) -> Json<SettingsView> {
    Json(state.settings.snapshot().view())
}

/// PUT /api/v1/admin/settings
#[utoipa::path(
    put,
    path = "/api/v1/admin/settings",
    request_body = UpdateSettingsRequest,
    params(
        ("Authorization" = String, Header, description = "Bearer admin token")
    ),
    responses(
        (status = 200, description = "Settings updated", body = SettingsView),
        (status = 401, description = "Admin token missing", body = AppError),
        (status = 403, description = "Admin token invalid", body = AppError),
        (status = 404, description = "Admin API disabled", body = AppError),
        (status = 422, description = "Invalid values", body = AppError)
    ),
    tag = "admin"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    _admin: AdminRequired,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsView>, AppError> {
    body.validate_request()?;
    let view = state.settings.update(body).await?;
    Ok(Json(view))
}
