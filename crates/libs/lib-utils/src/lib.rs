//! # Utilities Library
//!
//! Shared helpers for environment variables, time, and request field validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use time::{now_utc, from_unix, unix_after};
pub use validation::{validate_digits, validate_email, validate_not_empty, validate_present};
