//! Access gate, sessions and anti-forgery checks through the full router.

mod common;

use axum::http::{header, StatusCode};
use common::{
    get_with_cookie, new_visitor, post_form, post_json, settings_with_password, signed_in_visitor,
    test_app, TEST_PASSWORD,
};
use pretty_assertions::assert_eq;
use server::config::ProviderEndpoints;
use shared_types::{messages, AppError, MessageResponse, Settings};

fn app_with_password() -> axum::Router {
    test_app(settings_with_password(TEST_PASSWORD), ProviderEndpoints::default())
}

#[tokio::test]
async fn first_visit_mints_session_cookie() {
    let app = app_with_password();
    let response = get_with_cookie(&app, "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let set_cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("plu_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(response.body.contains("name=\"password\""));
}

#[tokio::test]
async fn returning_visitor_keeps_session() {
    let app = app_with_password();
    let visitor = new_visitor(&app).await;

    let response = get_with_cookie(&app, "/api/v1/session", Some(&visitor.cookie)).await;
    assert!(response.headers.get(header::SET_COOKIE).is_none());
    assert_eq!(response.json()["csrf_token"], visitor.csrf.as_str());
    assert_eq!(response.json()["authenticated"], false);
}

#[tokio::test]
async fn forged_cookie_gets_a_fresh_anonymous_session() {
    let app = app_with_password();
    let response = get_with_cookie(&app, "/api/v1/session", Some("plu_session=forged.token.value")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.session_cookie().is_some());
    assert_eq!(response.json()["authenticated"], false);
}

#[tokio::test]
async fn wrong_password_three_times_then_correct() {
    let app = app_with_password();
    let visitor = new_visitor(&app).await;

    for _ in 0..3 {
        let form = format!("password=guess&csrf_token={}", visitor.csrf);
        let response = post_form(&app, "/access", &visitor.cookie, &form).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(response.body.contains(messages::INCORRECT_PASSWORD));
        assert!(response.session_cookie().is_none());
    }

    let form = format!("password={}&csrf_token={}", TEST_PASSWORD, visitor.csrf);
    let response = post_form(&app, "/access", &visitor.cookie, &form).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.headers[header::LOCATION], "/");
    let cookie = response.session_cookie().unwrap();

    let page = get_with_cookie(&app, "/", Some(&cookie)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("id=\"plu-street\""));
    assert!(!page.body.contains("name=\"password\""));
}

#[tokio::test]
async fn access_form_without_token_is_rejected() {
    let app = app_with_password();
    let visitor = new_visitor(&app).await;

    let form = format!("password={TEST_PASSWORD}");
    let response = post_form(&app, "/access", &visitor.cookie, &form).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.body.contains(messages::FORM_EXPIRED));
    assert!(response.session_cookie().is_none());
}

#[tokio::test]
async fn api_access_grants_and_sign_out_revokes() {
    let app = app_with_password();
    let visitor = signed_in_visitor(&app).await;

    let session = get_with_cookie(&app, "/api/v1/session", Some(&visitor.cookie)).await;
    assert_eq!(session.json()["authenticated"], true);
    // Same session id, so the token from before sign-in still works
    assert_eq!(session.json()["csrf_token"], visitor.csrf.as_str());

    let response = post_json(&app, "/api/v1/sign-out", &visitor, Some(&visitor.csrf), "").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let cookie = response.session_cookie().unwrap();

    let session = get_with_cookie(&app, "/api/v1/session", Some(&cookie)).await;
    assert_eq!(session.json()["authenticated"], false);
}

#[tokio::test]
async fn api_access_reports_messages() {
    let app = app_with_password();
    let visitor = new_visitor(&app).await;

    let wrong = serde_json::json!({ "password": "nope" }).to_string();
    let response = post_json(&app, "/api/v1/access", &visitor, Some(&visitor.csrf), &wrong).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let err: AppError = serde_json::from_str(&response.body).unwrap();
    assert_eq!(err.message, messages::INCORRECT_PASSWORD);

    let empty = serde_json::json!({ "password": "" }).to_string();
    let response = post_json(&app, "/api/v1/access", &visitor, Some(&visitor.csrf), &empty).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&response.body).unwrap();
    assert_eq!(err.display_message(), messages::PASSWORD_REQUIRED);

    let right = serde_json::json!({ "password": TEST_PASSWORD }).to_string();
    let response = post_json(&app, "/api/v1/access", &visitor, Some(&visitor.csrf), &right).await;
    assert_eq!(response.status, StatusCode::OK);
    let body: MessageResponse = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body.message, messages::ACCESS_GRANTED);
}

#[tokio::test]
async fn unconfigured_tool_shows_notice() {
    let app = test_app(Settings::default(), ProviderEndpoints::default());
    let visitor = new_visitor(&app).await;

    let page = get_with_cookie(&app, "/", Some(&visitor.cookie)).await;
    assert!(page.body.contains(messages::NOT_CONFIGURED));
    assert!(!page.body.contains("name=\"password\""));

    let body = serde_json::json!({ "password": "anything" }).to_string();
    let response = post_json(&app, "/api/v1/access", &visitor, Some(&visitor.csrf), &body).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let err: AppError = serde_json::from_str(&response.body).unwrap();
    assert_eq!(err.message, messages::NOT_CONFIGURED);
}

#[tokio::test]
async fn sign_out_form_returns_to_password_page() {
    let app = app_with_password();
    let visitor = signed_in_visitor(&app).await;

    let form = format!("csrf_token={}", visitor.csrf);
    let response = post_form(&app, "/sign-out", &visitor.cookie, &form).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let cookie = response.session_cookie().unwrap();

    let page = get_with_cookie(&app, "/", Some(&cookie)).await;
    assert!(page.body.contains("name=\"password\""));
}
