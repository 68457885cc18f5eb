//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod auth;
pub mod upload;

pub use auth::AuthService;
pub use upload::{UploadService, UPLOADS_URL_PREFIX};
