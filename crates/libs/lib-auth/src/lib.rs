//! # Authentication Library
//!
//! Password hashing and bearer token issuance/verification.
//!
//! Both halves are stateless: the Argon2 cost and the signing secret are passed
//! in by the caller on every call.

pub mod error;
pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pwd::{hash_password, verify_password, HashCost};
pub use token::{decode_jwt, encode_jwt, encode_jwt_expiring, Claims, TOKEN_TTL_MINUTES};
