//! # Integration Tests
//!
//! Full account lifecycle through the HTTP surface.

use super::*;

#[tokio::test]
async fn test_register_login_update_delete() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;

    // Change the password
    let (status, body) = send(
        &app,
        "PATCH",
        "/user",
        Some(&token),
        Some(json!({ "password": "NewPassword456!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User updated successfully" }));

    // Old password no longer works, new one does
    let (status, _) = send(
        &app,
        "POST",
        "/user/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let token = login_token(&app, "ada@example.com", "NewPassword456!").await;

    // Delete, then the account is gone
    let (status, body) = send(&app, "DELETE", "/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted successfully" }));

    let (status, _) = send(&app, "GET", "/user/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/user/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "NewPassword456!" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_email_can_be_reused_after_delete() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "0811").await;
    let token = login_token(&app, "ada@example.com", PASSWORD).await;

    send(&app, "DELETE", "/user", Some(&token), None).await;

    register_user(&app, "ada@example.com", "0811").await;
}
