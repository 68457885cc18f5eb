//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod blog;
pub mod experience;
pub mod portfolio;
pub mod profile;
pub mod techstack;
pub mod user;

pub use blog::{BlogRecord, BlogRepository};
pub use experience::{CreateExperience, ExperienceRecord, ExperienceRepository};
pub use portfolio::{PortfolioRecord, PortfolioRepository};
pub use profile::{ProfileRecord, ProfileRepository};
pub use techstack::{TechStackRecord, TechStackRepository};
pub use user::{CredentialStore, PgCredentialStore, UserRecord, UserRepository};

#[cfg(test)]
pub(crate) use user::InMemoryCredentialStore;
