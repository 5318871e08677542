//! # Auth Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The hash computation itself failed (bad cost parameters, resource exhaustion).
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// A stored hash could not be parsed as a PHC string.
    #[error("Stored password hash is malformed: {0}")]
    InvalidHash(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Any verification failure. The reason is deliberately not carried.
    #[error("Invalid token")]
    InvalidToken,
}
