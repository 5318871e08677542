//! # Auth Handler Tests
//!
//! Tests for registration and login, driven through the real router against
//! an in-memory database. The helpers here are shared with the account
//! handler tests.

mod integration;

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use lib_core::model::store::run_migrations;
use lib_core::dto::ErrorResponse;
use lib_core::{create_pool, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const PASSWORD: &str = "TestPassword123!";

/// Create test config with a cheap Argon2 cost
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        pwd_memory_kib: 1024,
        pwd_iterations: 1,
        pwd_parallelism: 1,
    }
}

/// Create test app with a fresh, migrated database
pub async fn test_app() -> Router {
    let pool = create_pool("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    run_migrations(&pool).await.expect("Failed to run migrations");

    create_router(AppState::new(pool, test_config()), &[])
}

/// Send one request and return the status and JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

pub fn register_body(email: &str, phone_number: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": PASSWORD,
        "phone_number": phone_number,
        "gender": "female",
    })
}

/// Register an account and assert it was created.
pub async fn register_user(app: &Router, email: &str, phone_number: &str) {
    let (status, body) = send(
        app,
        "POST",
        "/user/register",
        None,
        Some(register_body(email, phone_number)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
}

/// Log in and return the access token.
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/user/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().unwrap().to_string()
}

/// Decode an error envelope.
pub fn error_of(body: Value) -> ErrorResponse {
    serde_json::from_value(body).expect("body should be an error envelope")
}
