//! # Centralized Error Handling
//!
//! [`AppError`] is the one error type every account operation returns. It is a
//! closed set, and the HTTP boundary maps it exhaustively in
//! [`AppError::status_code`].
//!
//! ## Error Categories
//!
//! 1. **Client Errors**
//!    - [`Validation`](AppError::Validation) → 400 Bad Request
//!    - [`DuplicateField`](AppError::DuplicateField) → 409 Conflict
//!    - [`WrongPassword`](AppError::WrongPassword) / [`InvalidCredentials`](AppError::InvalidCredentials) → 401
//!    - [`AccountNotFound`](AppError::AccountNotFound) → 404 Not Found
//!
//! 2. **Authorization Gate**
//!    - [`MissingCredentials`](AppError::MissingCredentials) → 400 Bad Request
//!    - [`MalformedCredentials`](AppError::MalformedCredentials) → 400 Bad Request
//!    - [`InvalidToken`](AppError::InvalidToken) → 401 Unauthorized
//!
//! 3. **Server Errors** (opaque to callers)
//!    - [`Hashing`](AppError::Hashing), [`Signing`](AppError::Signing),
//!      [`Store`](AppError::Store), [`Config`](AppError::Config),
//!      [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! ## Login failures
//!
//! `AccountNotFound` and `WrongPassword` stay distinct inside the service so they
//! can be logged, but the login handler folds both into `InvalidCredentials`
//! with [`AppError::into_login_failure`] so that a caller cannot probe which
//! emails are registered.

use crate::dto::ErrorResponse;
use crate::model::store::AccountField;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request input.
    #[error("{0}")]
    Validation(String),

    /// A unique constraint was violated on the named field.
    #[error("{0} is already used by another user")]
    DuplicateField(AccountField),

    #[error("user not found")]
    AccountNotFound,

    #[error("wrong password")]
    WrongPassword,

    /// Uniform login failure shown to callers.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("Authorization header is empty")]
    MissingCredentials,

    #[error("Authorization header is invalid")]
    MalformedCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("Hashing error: {0}")]
    Hashing(String),

    #[error("Signing error: {0}")]
    Signing(String),

    /// Generic persistence failure.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateField(_) => StatusCode::CONFLICT,
            AppError::AccountNotFound => StatusCode::NOT_FOUND,
            AppError::WrongPassword | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::MissingCredentials | AppError::MalformedCredentials => StatusCode::BAD_REQUEST,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Hashing(_)
            | AppError::Signing(_)
            | AppError::Store(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a caller. Server-side failures never expose details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::WrongPassword | AppError::InvalidCredentials => {
                AppError::InvalidCredentials.to_string()
            }
            AppError::Hashing(_)
            | AppError::Signing(_)
            | AppError::Store(_)
            | AppError::Config(_)
            | AppError::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }

    /// Stable machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::DuplicateField(_) => "DuplicateField",
            AppError::AccountNotFound => "AccountNotFound",
            AppError::WrongPassword | AppError::InvalidCredentials => "InvalidCredentials",
            AppError::MissingCredentials => "MissingCredentials",
            AppError::MalformedCredentials => "MalformedCredentials",
            AppError::InvalidToken => "InvalidToken",
            AppError::Hashing(_)
            | AppError::Signing(_)
            | AppError::Store(_)
            | AppError::Config(_)
            | AppError::Internal(_) => "Internal",
        }
    }

    /// Collapse the two login failure paths into one externally visible error.
    pub fn into_login_failure(self) -> Self {
        match self {
            AppError::AccountNotFound | AppError::WrongPassword => AppError::InvalidCredentials,
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.user_message(),
            code: self.code().to_string(),
        });

        (status, body).into_response()
    }
}

/// Unique-constraint violations on `email`/`phone_number` become
/// [`AppError::DuplicateField`]; a missing row becomes [`AppError::AccountNotFound`].
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::AccountNotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                let source = db_err
                    .constraint()
                    .map(str::to_owned)
                    .unwrap_or_else(|| db_err.message().to_owned());

                match AccountField::from_constraint(&source) {
                    Some(field) => AppError::DuplicateField(field),
                    None => AppError::Store(format!("Unique constraint violated: {}", source)),
                }
            }
            sqlx::Error::Database(db_err) => AppError::Store(db_err.message().to_string()),
            _ => AppError::Store(err.to_string()),
        }
    }
}
