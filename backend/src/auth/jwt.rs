//! JWT token generation and validation
//!
//! Provides access and refresh token management with pre-computed keys.
//! Both token kinds carry the same `{ userId, username }` payload and differ
//! only in lifetime and in the `typ` claim, which is enforced only when
//! strict token types are enabled.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Identity carried by every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub user_id: i32,
    pub username: String,
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: TokenPayload,
    /// Token type: "access" or "refresh"
    pub typ: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token lifetimes and policy
#[derive(Clone, Debug)]
pub struct JwtSettings {
    pub access_token_expiry_secs: i64,
    pub refresh_token_expiry_secs: i64,
    pub strict_token_types: bool,
}

/// JWT service for token operations
///
/// Keys are wrapped in Arc for cheap cloning into handlers.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    validation: Arc<Validation>,
    settings: JwtSettings,
}

impl TokenService {
    pub fn new(secret: &str, settings: JwtSettings) -> Self {
        // Expiry is exact, no grace period
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            validation: Arc::new(validation),
            settings,
        }
    }

    /// Issue an access token (7 days by default)
    #[inline]
    pub fn issue_access_token(&self, payload: &TokenPayload) -> Result<String> {
        self.issue(payload, ACCESS_TOKEN_TYPE, self.settings.access_token_expiry_secs)
    }

    /// Issue a refresh token (30 days by default)
    #[inline]
    pub fn issue_refresh_token(&self, payload: &TokenPayload) -> Result<String> {
        self.issue(payload, REFRESH_TOKEN_TYPE, self.settings.refresh_token_expiry_secs)
    }

    fn issue(&self, payload: &TokenPayload, typ: &str, expiry_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            payload: payload.clone(),
            typ: typ.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate {} token: {}", typ, e))
    }

    /// Check signature and expiry. Any failure yields `None`.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, self.keys.decoding(), &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                None
            }
        }
    }

    /// Verify a token presented on an access-protected path
    pub fn verify_access(&self, token: &str) -> Option<TokenPayload> {
        self.verify_typed(token, ACCESS_TOKEN_TYPE)
    }

    /// Verify a token presented to the refresh endpoint
    pub fn verify_refresh(&self, token: &str) -> Option<TokenPayload> {
        self.verify_typed(token, REFRESH_TOKEN_TYPE)
    }

    fn verify_typed(&self, token: &str, expected: &str) -> Option<TokenPayload> {
        let claims = self.verify(token)?;
        if self.settings.strict_token_types && claims.typ != expected {
            tracing::debug!(typ = %claims.typ, expected, "Token type mismatch");
            return None;
        }
        Some(claims.payload)
    }

    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.settings.access_token_expiry_secs
    }
}
