//! # Account DTOs
//!
//! Bodies for the authenticated `/user` endpoints plus the shared message and
//! error envelopes.

use crate::error::{AppError, Result};
use crate::model::store::{Account, FieldUpdate};
use chrono::{DateTime, Utc};
use lib_utils::validate_digits;
use serde::{Deserialize, Serialize};

/// Partial update request. Absent or empty fields are left unchanged.
///
/// Email is not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAccountRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// An update request with each field resolved to [`FieldUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub first_name: FieldUpdate<String>,
    pub last_name: FieldUpdate<String>,
    /// Plaintext; hashed by the service before it reaches the store.
    pub password: FieldUpdate<String>,
    pub phone_number: FieldUpdate<String>,
    pub gender: FieldUpdate<String>,
}

impl UpdateAccountRequest {
    /// Resolve wire fields and validate the ones being set.
    pub fn into_patch(self) -> Result<AccountPatch> {
        let patch = AccountPatch {
            first_name: self.first_name.into(),
            last_name: self.last_name.into(),
            password: self.password.into(),
            phone_number: self.phone_number.into(),
            gender: self.gender.into(),
        };

        if let Some(phone_number) = patch.phone_number.value() {
            validate_digits(phone_number, "phone_number").map_err(AppError::Validation)?;
        }

        Ok(patch)
    }
}

/// Public view of an account. The password hash is never included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            phone_number: account.phone_number,
            gender: account.gender,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error envelope produced by [`AppError`]'s `IntoResponse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
