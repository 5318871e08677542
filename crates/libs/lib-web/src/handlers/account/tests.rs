//! # Account Handler Tests
//!
//! Gate behaviour and the profile/update/delete endpoints.

use crate::handlers::auth::tests::{login_token, register_user, send, test_app, test_config, PASSWORD};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Utc};
use lib_auth::encode_jwt_expiring;
use serde_json::json;
use tower::ServiceExt;

// ========== Authorization Gate ==========

#[tokio::test]
async fn test_profile_without_header() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/user/profile", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MissingCredentials");
}

#[tokio::test]
async fn test_profile_with_malformed_header() {
    let app = test_app().await;

    for value in ["Token abc", "Bearer", "Bearer a b", "bearer abc"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/user/profile")
                    .header(header::AUTHORIZATION, value)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "header: {}", value);
    }
}

#[tokio::test]
async fn test_profile_with_invalid_and_expired_tokens() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;

    let (status, body) = send(&app, "GET", "/user/profile", Some("not.a.token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "InvalidToken");

    let expired = encode_jwt_expiring(
        1,
        &test_config().jwt_secret,
        Utc::now() - Duration::minutes(5),
    )
    .unwrap();
    let (status, _) = send(&app, "GET", "/user/profile", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let foreign = encode_jwt_expiring(
        1,
        "another-secret-key-that-is-also-long-enough!!",
        Utc::now() + Duration::minutes(5),
    )
    .unwrap();
    let (status, _) = send(&app, "GET", "/user/profile", Some(&foreign), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_and_update_are_gated() {
    let app = test_app().await;

    let (status, _) = send(&app, "DELETE", "/user", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PATCH", "/user", Some("garbage"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ========== Profile ==========

#[tokio::test]
async fn test_profile_returns_caller_without_hash() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;

    let (status, body) = send(&app, "GET", "/user/profile", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["phone_number"], "0811");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

// ========== Update ==========

#[tokio::test]
async fn test_update_partial_fields() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;

    let (status, _) = send(
        &app,
        "PATCH",
        "/user",
        Some(&token),
        Some(json!({ "first_name": "Augusta", "last_name": "", "email": "new@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, profile) = send(&app, "GET", "/user/profile", Some(&token), None).await;
    assert_eq!(profile["first_name"], "Augusta");
    assert_eq!(profile["last_name"], "Lovelace");
    assert_eq!(profile["email"], "ada@example.com");

    // Password untouched
    login_token(&app, "ada@example.com", PASSWORD).await;
}

#[tokio::test]
async fn test_update_rejects_non_numeric_phone() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/user",
        Some(&token),
        Some(json!({ "phone_number": "abc" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "Validation");
}

#[tokio::test]
async fn test_update_duplicate_phone_number() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    register_user(&app, "bob@example.com", "0822").await;
    let token = login_token(&app, "bob@example.com", PASSWORD).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/user",
        Some(&token),
        Some(json!({ "phone_number": "0811" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "phone number is already used by another user");
}

#[tokio::test]
async fn test_update_after_delete_is_not_found() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;
    send(&app, "DELETE", "/user", Some(&token), None).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/user",
        Some(&token),
        Some(json!({ "gender": "male" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "AccountNotFound");
}

// ========== Delete ==========

#[tokio::test]
async fn test_delete_twice_succeeds() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;

    let (first, _) = send(&app, "DELETE", "/user", Some(&token), None).await;
    let (second, _) = send(&app, "DELETE", "/user", Some(&token), None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}
