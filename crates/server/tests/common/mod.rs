use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    routing::get as route_get,
    Json, Router,
};
use serde_json::Value;
use server::config::{ProviderEndpoints, ServerConfig};
use server::settings::SettingsStore;
use server::AppState;
use shared_types::Settings;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "open-sesame";
pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const CHICAGO: &str = "350 N Orleans St, Chicago, IL 60654";

#[allow(dead_code)]
pub fn settings_with_password(password: &str) -> Settings {
    let mut settings = Settings::default();
    settings.access.password_hash =
        Some(server::auth::password::hash_password(password).unwrap());
    settings
}

#[allow(dead_code)]
/// Build the full router over in-memory settings and the given provider endpoints.
pub fn test_app(settings: Settings, endpoints: ProviderEndpoints) -> Router {
    let config = ServerConfig {
        endpoints,
        admin_token: Some(ADMIN_TOKEN.to_string()),
        ..ServerConfig::default()
    };
    test_app_with_config(config, settings)
}

#[allow(dead_code)]
pub fn test_app_with_config(config: ServerConfig, settings: Settings) -> Router {
    let state = AppState::new(config, SettingsStore::in_memory(settings)).unwrap();
    server::rest::app_router(state)
}

/// Canned provider responses plus per-endpoint hit counters.
#[allow(dead_code)]
pub struct StubProviders {
    pub endpoints: ProviderEndpoints,
    pub smarty_hits: Arc<AtomicUsize>,
    pub nominatim_hits: Arc<AtomicUsize>,
    pub overpass_hits: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl StubProviders {
    pub fn hits(&self) -> (usize, usize, usize) {
        (
            self.smarty_hits.load(Ordering::SeqCst),
            self.nominatim_hits.load(Ordering::SeqCst),
            self.overpass_hits.load(Ordering::SeqCst),
        )
    }
}

fn counted(hits: Arc<AtomicUsize>, body: Value) -> axum::routing::MethodRouter {
    route_get(move || {
        let hits = hits.clone();
        let body = body.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            Json(body)
        }
    })
}

#[allow(dead_code)]
/// Serve all three provider APIs from one local listener.
pub async fn spawn_providers(smarty: Value, nominatim: Value, overpass: Value) -> StubProviders {
    let smarty_hits = Arc::new(AtomicUsize::new(0));
    let nominatim_hits = Arc::new(AtomicUsize::new(0));
    let overpass_hits = Arc::new(AtomicUsize::new(0));

    let router = Router::new()
        .route("/street-address", counted(smarty_hits.clone(), smarty))
        .route("/search", counted(nominatim_hits.clone(), nominatim))
        .route("/api/interpreter", counted(overpass_hits.clone(), overpass));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    StubProviders {
        endpoints: ProviderEndpoints {
            smarty: base.clone(),
            nominatim: base.clone(),
            overpass: base,
        },
        smarty_hits,
        nominatim_hits,
        overpass_hits,
    }
}

#[allow(dead_code)]
pub fn nominatim_chicago() -> Value {
    serde_json::json!([{
        "lat": "41.8885",
        "lon": "-87.6368",
        "display_name": "350, North Orleans Street, Chicago, Cook County, Illinois, 60654, United States",
        "address": {
            "city": "Chicago",
            "county": "Cook County",
            "state": "Illinois",
            "postcode": "60654"
        }
    }])
}

#[allow(dead_code)]
pub fn overpass_office() -> Value {
    serde_json::json!({
        "elements": [
            {"type": "way", "id": 1, "tags": {"building": "office", "building:levels": "25", "start_date": "1927"}},
            {"type": "node", "id": 2, "lat": 41.8885, "lon": -87.6368}
        ]
    })
}

/// Status, headers and body of one response.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    /// `plu_session=<token>` from Set-Cookie, ready to send back.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("plu_session="))
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// A visitor: the cookie it holds and its anti-forgery token.
#[derive(Clone)]
#[allow(dead_code)]
pub struct Visitor {
    pub cookie: String,
    pub csrf: String,
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
/// Helper to make a GET request, optionally carrying a session cookie.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = get_with_cookie(app, uri, None).await;
    (response.status, response.body)
}

#[allow(dead_code)]
/// Helper to POST a urlencoded form as a browser would.
pub async fn post_form(app: &Router, uri: &str, cookie: &str, form: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
/// Helper to POST JSON as a script client, with the anti-forgery header when given.
pub async fn post_json(
    app: &Router,
    uri: &str,
    visitor: &Visitor,
    csrf: Option<&str>,
    json: &str,
) -> TestResponse {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, &visitor.cookie)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(csrf) = csrf {
        builder = builder.header("x-csrf-token", csrf);
    }
    send(app, builder.body(Body::from(json.to_string())).unwrap()).await
}

#[allow(dead_code)]
/// Start an anonymous session through `GET /api/v1/session`.
pub async fn new_visitor(app: &Router) -> Visitor {
    let response = get_with_cookie(app, "/api/v1/session", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.session_cookie().expect("session cookie minted");
    let csrf = response.json()["csrf_token"].as_str().unwrap().to_string();
    Visitor { cookie, csrf }
}

#[allow(dead_code)]
/// A visitor that has entered the access password.
pub async fn signed_in_visitor(app: &Router) -> Visitor {
    let visitor = new_visitor(app).await;
    let body = serde_json::json!({ "password": TEST_PASSWORD }).to_string();
    let response = post_json(app, "/api/v1/access", &visitor, Some(&visitor.csrf), &body).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    Visitor {
        cookie: response.session_cookie().expect("session cookie reissued"),
        csrf: visitor.csrf,
    }
}

#[allow(dead_code)]
/// Helper to PUT JSON with a bearer token.
pub async fn put_json_with_bearer(app: &Router, uri: &str, token: &str, json: &str) -> TestResponse {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
/// Helper to GET with a bearer token.
pub async fn get_with_bearer(app: &Router, uri: &str, token: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
