//! Authentication module
//!
//! Provides JWT-based authentication with bcrypt password hashing and
//! per-client login rate limiting.

mod jwt;
mod middleware;
mod password;
mod rate_limit;

pub use jwt::{Claims, JwtSettings, TokenPayload, TokenService, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE};
pub use middleware::{extract_bearer, AuthUser};
pub use password::{PasswordService, HASH_COST};
pub use rate_limit::{client_key, LoginRateLimiter, RateLimitDecision, UNKNOWN_CLIENT};
