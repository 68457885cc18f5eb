//! Password hashing using bcrypt
//!
//! bcrypt is intentionally CPU-intensive, so the async variants run on the
//! blocking thread pool.

use anyhow::Result;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with a fresh salt (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, HASH_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Compare a password against a stored hash (blocking operation)
    ///
    /// A malformed hash compares as a mismatch.
    pub fn verify(password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
        }
    }

    /// Compare a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}
