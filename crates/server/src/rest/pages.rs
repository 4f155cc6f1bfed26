//! Server-rendered HTML pages and their form posts.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use shared_types::{messages, AppError, LookupRequest, LookupResponse, PasswordCheckRequest};
use shared_ui::{
    render_password_page, render_tool_page, AddressFields, PasswordPageProps, ToolPageProps,
    LOOKUP_CSS, LOOKUP_JS,
};

use crate::auth::gate::{self, RequestContext};
use crate::error_convert::ValidateRequest;
use crate::lookup::run_lookup;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AccessForm {
    #[serde(default)]
    pub password: String,
    pub csrf_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    pub csrf_token: Option<String>,
}

impl LookupForm {
    fn fields(&self) -> AddressFields {
        AddressFields {
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip: self.zip.trim().to_string(),
        }
    }

    fn to_request(&self) -> LookupRequest {
        LookupRequest {
            street: Some(self.street.clone()),
            city: Some(self.city.clone()),
            state: Some(self.state.clone()),
            zip: Some(self.zip.clone()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CsrfForm {
    pub csrf_token: Option<String>,
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.status_code_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn password_page(state: &AppState, ctx: &RequestContext, message: Option<String>) -> Html<String> {
    let settings = state.settings.snapshot();
    Html(render_password_page(PasswordPageProps {
        title: settings.tool.title.clone(),
        csrf_token: ctx.csrf_token.clone(),
        configured: settings.password_hash().is_some(),
        message,
    }))
}

fn tool_page(
    state: &AppState,
    ctx: &RequestContext,
    fields: AddressFields,
    error: Option<String>,
    result: Option<LookupResponse>,
) -> Html<String> {
    let settings = state.settings.snapshot();
    Html(render_tool_page(ToolPageProps {
        title: settings.tool.title.clone(),
        instructions: settings.tool.instructions.clone(),
        csrf_token: ctx.csrf_token.clone(),
        maps_api_key: settings.maps_api_key().map(str::to_string),
        fields,
        error,
        result,
    }))
}

/// GET /
///
/// The tool for visitors who entered the password, the password page otherwise.
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> Html<String> {
    if ctx.is_authenticated() {
        tool_page(&state, &ctx, AddressFields::default(), None, None)
    } else {
        password_page(&state, &ctx, None)
    }
}

/// POST /access
pub async fn access(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<AccessForm>,
) -> Response {
    let attempt = ctx
        .verify_csrf(&state.config.session_secret, form.csrf_token.as_deref())
        .and_then(|()| {
            PasswordCheckRequest {
                password: form.password.clone(),
            }
            .validate_request()
        })
        .and_then(|()| {
            gate::sign_in(
                &state.config,
                &state.settings.snapshot(),
                &ctx,
                &form.password,
            )
        });

    match attempt {
        Ok(headers) => (headers, Redirect::to("/")).into_response(),
        Err(e) => (
            status_of(&e),
            password_page(&state, &ctx, Some(e.display_message())),
        )
            .into_response(),
    }
}

/// POST /lookup
pub async fn lookup(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<LookupForm>,
) -> Response {
    if !ctx.is_authenticated() {
        return (
            StatusCode::UNAUTHORIZED,
            password_page(&state, &ctx, Some(messages::ACCESS_REQUIRED.to_string())),
        )
            .into_response();
    }

    let fields = form.fields();
    if let Err(e) = ctx.verify_csrf(&state.config.session_secret, form.csrf_token.as_deref()) {
        return (
            status_of(&e),
            tool_page(&state, &ctx, fields, Some(e.display_message()), None),
        )
            .into_response();
    }

    let resolver = state.address_resolver();
    let buildings = state.building_source();
    match run_lookup(&ctx, &resolver, &buildings, &form.to_request().to_query()).await {
        Ok(response) => tool_page(&state, &ctx, fields, None, Some(response)).into_response(),
        Err(e) => (
            status_of(&e),
            tool_page(&state, &ctx, fields, Some(e.display_message()), None),
        )
            .into_response(),
    }
}

/// POST /sign-out
///
/// A forged or stale form leaves the session as it is.
pub async fn sign_out(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<CsrfForm>,
) -> Response {
    let result = ctx
        .verify_csrf(&state.config.session_secret, form.csrf_token.as_deref())
        .and_then(|()| gate::sign_out(&state.config, &ctx));

    match result {
        Ok(headers) => (headers, Redirect::to("/")).into_response(),
        Err(_) => Redirect::to("/").into_response(),
    }
}

/// GET /assets/lookup.css
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], LOOKUP_CSS)
}

/// GET /assets/lookup.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        LOOKUP_JS,
    )
}
