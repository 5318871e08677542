//! # HTTP Request Handlers
//!
//! Handlers stay thin: decode the body, validate its shape, delegate to
//! [`AccountService`](crate::services::AccountService), and shape the
//! response. Every failure is an [`AppError`](lib_core::AppError), rendered by
//! its `IntoResponse` impl.
//!
//! - **[`auth`]**: public endpoints
//!   - `POST /user/register` - Create a new account
//!   - `POST /user/login` - Exchange email/password for a bearer token
//!
//! - **[`account`]**: endpoints behind the authorization gate
//!   - `GET /user/profile` - Fetch the caller's account
//!   - `PATCH /user` - Partially update the caller's account
//!   - `DELETE /user` - Delete the caller's account
//!
//! Protected handlers take the caller's identity from `Extension<Claims>`,
//! inserted by [`require_auth`](crate::middleware::require_auth). No handler
//! accepts an account id from the request.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use lib_core::AppError;

pub mod account;
pub mod auth;

/// Turn a body rejection (bad JSON, wrong content type) into a validation error.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}
