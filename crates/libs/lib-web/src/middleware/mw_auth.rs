//! # Authentication Middleware
//!
//! The authorization gate in front of every account endpoint except register
//! and login.
//!
//! Each request walks one path through:
//!
//! ```text
//! Start ─(no header)──────────────► MissingCredentials
//!   │
//! HeaderPresent ─(not "Bearer <t>")► MalformedCredentials
//!   │
//! WellFormed ─(token rejected)─────► InvalidToken
//!   │
//! Authorized: Claims inserted into request extensions
//! ```
//!
//! Handlers then extract the identity with `Extension<Claims>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_auth::Claims;
//!
//! async fn protected_handler(Extension(claims): Extension<Claims>) -> String {
//!     format!("Hello, account {}!", claims.account_id())
//! }
//! ```

use crate::services::account::map_auth_err;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{decode_jwt, Claims};
use lib_core::{AppError, Config};
use tracing::{debug, warn};

const BEARER_SCHEME: &str = "Bearer";

/// Split an `Authorization` header value into its bearer token.
///
/// The value must be exactly two whitespace-separated parts, the first being
/// literally `Bearer`.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AppError> {
    let header = match header {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(AppError::MissingCredentials),
    };

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Ok(token),
        _ => Err(AppError::MalformedCredentials),
    }
}

/// Run the full gate over a raw header value.
pub fn authorize(header: Option<&str>, secret: &str) -> Result<Claims, AppError> {
    let token = extract_bearer(header)?;
    decode_jwt(token, secret).map_err(map_auth_err)
}

/// Authentication middleware.
///
/// On success the request continues with [`Claims`] in its extensions; on
/// failure the [`AppError`] is rendered as the response.
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            warn!("[AUTH] Authorization header is not valid text");
            AppError::MalformedCredentials
        })?),
        None => None,
    };

    let claims = authorize(header, &config.jwt_secret).inspect_err(|e| {
        warn!("[AUTH] Request rejected: {}", e);
    })?;

    debug!(
        "[AUTH] Authenticated account: {} (token expires {:?})",
        claims.account_id(),
        claims.expires_at()
    );

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
