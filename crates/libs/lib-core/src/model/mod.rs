//! # Model
//!
//! Account entity and its persistence.

pub mod store;
