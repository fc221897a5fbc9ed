//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs carrying only the user id. Roles are
//! looked up from the database on each guarded request, so a role change
//! takes effect without reissuing tokens.

use gatehouse_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in seconds (default: 86400).
    pub expiry_secs: i64,
}

/// Default access token lifetime: 24 hours.
const DEFAULT_EXPIRY_SECS: i64 = 86_400;

impl JwtConfig {
    /// Load JWT configuration from a variable lookup.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_EXPIRY_SECS` | no       | `86400` |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty, or if `JWT_EXPIRY_SECS`
    /// is not a positive integer.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let secret = var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_secs: i64 = var("JWT_EXPIRY_SECS")
            .unwrap_or_else(|| DEFAULT_EXPIRY_SECS.to_string())
            .parse()
            .expect("JWT_EXPIRY_SECS must be a valid i64");
        assert!(expiry_secs > 0, "JWT_EXPIRY_SECS must be positive");

        Self {
            secret,
            expiry_secs,
        }
    }
}

/// Generate an HS256 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        // Saturates for lifetimes that run past the end of i64 time.
        exp: now.saturating_add(config.expiry_secs),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
