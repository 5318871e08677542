//! # Services Layer
//!
//! Business logic between the HTTP handlers and the account store:
//!
//! ```text
//! Handlers (HTTP) → AccountService → lib-auth (hash / token) + AccountRepository
//! ```
//!
//! Services return `Result<T, AppError>` and convert lower-level errors
//! (auth library, store, blocking task failures) into `AppError` variants.

pub mod account;

pub use account::AccountService;
