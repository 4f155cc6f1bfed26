pub mod admin;
pub mod api;
pub mod pages;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::auth::middleware::session_middleware;
use crate::openapi::ApiDoc;
use crate::{health, telemetry, AppState};

/// Build the full application router: HTML pages, JSON API, admin API,
/// health and the OpenAPI document, behind the session middleware.
pub fn app_router(state: AppState) -> Router {
    let router = Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/access", post(pages::access))
        .route("/lookup", post(pages::lookup))
        .route("/sign-out", post(pages::sign_out))
        .route("/assets/lookup.css", get(pages::stylesheet))
        .route("/assets/lookup.js", get(pages::script))
        // Script clients
        .route("/api/v1/session", get(api::session))
        .route("/api/v1/access", post(api::access))
        .route("/api/v1/lookup", post(api::lookup))
        .route("/api/v1/sign-out", post(api::sign_out))
        // Administration
        .route(
            "/api/v1/admin/settings",
            get(admin::get_settings).put(admin::update_settings),
        )
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .with_state(state);

    telemetry::with_request_tracing(router)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
