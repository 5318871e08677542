//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies of the HTTP API. Field names are snake_case on
//! the wire.

pub mod account;
pub mod auth;

pub use account::*;
pub use auth::*;
