//! # Authentication Handlers
//!
//! Registration and login. Both are public.
//!
//! ```rust,no_run
//! use axum::{Router, routing::post};
//! use lib_web::handlers::auth::{register, login};
//! use lib_web::AppState;
//!
//! let app: Router<AppState> = Router::new()
//!     .route("/user/register", post(register))
//!     .route("/user/login", post(login));
//! ```

use super::json_body;
use crate::services::AccountService;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
use lib_core::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use lib_core::{AppError, Result};
use tracing::{info, instrument, warn};

/// Register handler - creates a new account.
///
/// # Returns
///
/// * `201 {"message": "User registered successfully"}`
/// * `400` when a field is missing or malformed
/// * `409` when the email or phone number is already used
#[instrument(skip_all)]
pub async fn register(
    State(accounts): State<AccountService>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    info!("[REGISTER] New registration request");

    let req = json_body(payload)?;
    req.validate()
        .inspect_err(|e| warn!("[REGISTER] Rejected: {}", e))?;

    accounts.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Login handler - verifies credentials and returns a bearer token.
///
/// An unknown email and a wrong password produce the same 401 response.
#[instrument(skip_all)]
pub async fn login(
    State(accounts): State<AccountService>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    info!("[LOGIN] Login request");

    let req = json_body(payload)?;
    req.validate()
        .inspect_err(|e| warn!("[LOGIN] Rejected: {}", e))?;

    let access_token = accounts
        .login(&req.email, req.password)
        .await
        .map_err(AppError::into_login_failure)?;

    Ok(Json(LoginResponse { access_token }))
}

#[cfg(test)]
pub(crate) mod tests;
