//! # Authentication DTOs
//!
//! - `POST /user/register` - [`RegisterRequest`] -> [`MessageResponse`](super::MessageResponse)
//! - `POST /user/login` - [`LoginRequest`] -> [`LoginResponse`]
//!
//! ```text
//! POST /user/login
//! Content-Type: application/json
//!
//! { "email": "ada@example.com", "password": "MyPassword123!" }
//! ```
//!
//! Response:
//! ```text
//! { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
//! ```

use crate::error::{AppError, Result};
use lib_utils::{validate_digits, validate_email, validate_not_empty, validate_present};
use serde::{Deserialize, Serialize};

/// Registration request. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
}

impl RegisterRequest {
    /// Check request shape; the first failing field is reported.
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.first_name, "first_name")
            .and_then(|_| validate_not_empty(&self.last_name, "last_name"))
            .and_then(|_| validate_not_empty(&self.email, "email"))
            .and_then(|_| validate_email(&self.email, "email"))
            .and_then(|_| validate_present(&self.password, "password"))
            .and_then(|_| validate_not_empty(&self.phone_number, "phone_number"))
            .and_then(|_| validate_digits(&self.phone_number, "phone_number"))
            .and_then(|_| validate_not_empty(&self.gender, "gender"))
            .map_err(AppError::Validation)
    }
}

/// Login request.
///
/// Password is sent in plaintext over HTTPS and compared against the stored
/// Argon2 hash; it is never stored or logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.email, "email")
            .and_then(|_| validate_email(&self.email, "email"))
            .and_then(|_| validate_present(&self.password, "password"))
            .map_err(AppError::Validation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
}
