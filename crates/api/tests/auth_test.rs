//! Registration, login, session and logout over HTTP.

mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{PASSWORD, TestApp, session_cookie};

#[tokio::test]
async fn test_register_returns_created_user_id() {
    let app = TestApp::new();

    let response = app.register("maria", "maria@campus.edu").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["user_id"].is_string());
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let app = TestApp::new();
    app.register("maria", "maria@campus.edu").await;

    let response = app.register("someone_else", "MARIA@campus.edu").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE");
}

#[tokio::test]
async fn test_register_missing_password_is_validation_error() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            None,
            &json!({"username": "maria", "email": "maria@campus.edu"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_mismatched_confirmation() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/register",
            None,
            &json!({
                "username": "maria",
                "email": "maria@campus.edu",
                "password": PASSWORD,
                "confirm_password": "something-different",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_sets_http_only_cookie() {
    let app = TestApp::new();
    app.register("maria", "maria@campus.edu").await;

    let response = app.login("maria@campus.edu", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "maria");
    assert_eq!(response.body["user"]["university"], "State University");
    assert!(response.body["user"].get("password_hash").is_none());

    let set_cookie = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("pocketbook_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("maria", "maria@campus.edu").await;

    let wrong_password = app.login("maria@campus.edu", "not-the-password").await;
    let unknown_email = app.login("nobody@campus.edu", PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert!(session_cookie(&wrong_password.headers).is_none());
}

#[tokio::test]
async fn test_me_with_cookie_and_bearer() {
    let app = TestApp::new();
    let user = app.logged_in("maria").await;

    let via_cookie = app.get_with_cookie("/api/me", &user.cookie).await;
    let via_bearer = app.get("/api/me", Some(&user.token)).await;

    assert_eq!(via_cookie.status, StatusCode::OK);
    assert_eq!(via_cookie.body["id"], user.user_id.as_str());
    assert_eq!(via_cookie.body["email"], user.email.to_lowercase().as_str());
    assert_eq!(via_bearer.body, via_cookie.body);
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let app = TestApp::new();

    for uri in [
        "/api/me",
        "/api/transactions",
        "/api/analytics/monthly",
        "/api/analytics/categories",
        "/api/categories",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }

    let forged = app.get("/api/me", Some("not-a-jwt")).await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new();
    let user = app.logged_in("maria").await;

    let response = app.get_with_cookie("/logout", &user.cookie).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.headers.get(header::LOCATION).unwrap(), "/login");
    let cleared = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cleared.starts_with("pocketbook_session="));

    let after = app.get("/api/me", Some(&user.token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_logout_revokes_session() {
    let app = TestApp::new();
    let user = app.logged_in("maria").await;

    let response = app.get("/logout", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::FOUND);

    let after = app.get("/api/me", Some(&user.token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);

    let cookie = app.get_with_cookie("/api/me", &user.cookie).await;
    assert_eq!(cookie.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_values_beyond_column_bounds() {
    let app = TestApp::new();
    let long_email = format!("{}@campus.edu", "m".repeat(300));

    let email = app.register("maria", &long_email).await;
    assert_eq!(email.status, StatusCode::BAD_REQUEST);
    assert_eq!(email.body["error"], "VALIDATION_ERROR");

    let income = app
        .post_json(
            "/register",
            None,
            &json!({
                "username": "maria",
                "email": "maria@campus.edu",
                "password": PASSWORD,
                "monthly_income": "123456789012345678.999",
            }),
        )
        .await;
    assert_eq!(income.status, StatusCode::BAD_REQUEST);
    assert_eq!(income.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_logout_without_session_still_redirects() {
    let app = TestApp::new();

    let response = app.get("/logout", None).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.headers.get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_store_outage_is_service_unavailable() {
    let app = TestApp::new();
    let user = app.logged_in("maria").await;
    app.store.set_available(false);

    let response = app.get("/api/transactions", Some(&user.token)).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");
}
