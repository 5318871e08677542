//! # Account Handlers
//!
//! Endpoints behind the authorization gate. The account acted on is always
//! the one named by the caller's token.

use super::json_body;
use crate::services::AccountService;
use axum::extract::{rejection::JsonRejection, Extension, Json, State};
use lib_auth::Claims;
use lib_core::dto::{AccountResponse, MessageResponse, UpdateAccountRequest};
use lib_core::Result;
use tracing::{instrument, warn};

/// `GET /user/profile`
#[instrument(skip_all)]
pub async fn get_profile(
    State(accounts): State<AccountService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AccountResponse>> {
    let account = accounts.get_by_id(claims.account_id()).await?;
    Ok(Json(account.into()))
}

/// `PATCH /user`
///
/// Absent or empty fields are left as they are. Email cannot be changed here.
#[instrument(skip_all)]
pub async fn update_account(
    State(accounts): State<AccountService>,
    Extension(claims): Extension<Claims>,
    payload: std::result::Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let patch = json_body(payload)?
        .into_patch()
        .inspect_err(|e| warn!("[UPDATE] Rejected: {}", e))?;

    accounts.update(claims.account_id(), patch).await?;

    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// `DELETE /user`
#[instrument(skip_all)]
pub async fn delete_account(
    State(accounts): State<AccountService>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MessageResponse>> {
    accounts.delete(claims.account_id()).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

#[cfg(test)]
mod tests;
