//! Portfolio Shared Library
//!
//! This crate contains the wire types, entity models and request validation
//! used by the backend and by any Rust client of the API.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::*;
pub use types::*;
pub use validation::{field_messages, validate_payload};
