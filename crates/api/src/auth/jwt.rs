//! JWT access- and refresh-token generation and validation.
//!
//! Both token kinds are HS256-signed JWTs carrying a [`Claims`] payload. They
//! are signed with different secrets, so a refresh token is never accepted
//! where an access token is expected (and vice versa).

use allnote_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub access_secret: String,
    /// HMAC-SHA256 secret for refresh tokens.
    pub refresh_secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in minutes (default: 60).
    pub refresh_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
/// Default refresh token expiry in minutes.
const DEFAULT_REFRESH_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `ACCESS_TOKEN_JWT_SECRET`  | **yes**  | --      |
    /// | `REFRESH_TOKEN_JWT_SECRET` | **yes**  | --      |
    /// | `ACCESS_TOKEN_EXPIRED_IN`  | no       | `15`    |
    /// | `REFRESH_TOKEN_EXPIRED_IN` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if either secret is missing or empty.
    pub fn from_env() -> Self {
        let access_secret = std::env::var("ACCESS_TOKEN_JWT_SECRET")
            .expect("ACCESS_TOKEN_JWT_SECRET must be set in the environment");
        assert!(
            !access_secret.is_empty(),
            "ACCESS_TOKEN_JWT_SECRET must not be empty"
        );

        let refresh_secret = std::env::var("REFRESH_TOKEN_JWT_SECRET")
            .expect("REFRESH_TOKEN_JWT_SECRET must be set in the environment");
        assert!(
            !refresh_secret.is_empty(),
            "REFRESH_TOKEN_JWT_SECRET must not be empty"
        );

        let access_token_expiry_mins: i64 = std::env::var("ACCESS_TOKEN_EXPIRED_IN")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("ACCESS_TOKEN_EXPIRED_IN must be a number of minutes");

        let refresh_token_expiry_mins: i64 = std::env::var("REFRESH_TOKEN_EXPIRED_IN")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_MINS.to_string())
            .parse()
            .expect("REFRESH_TOKEN_EXPIRED_IN must be a number of minutes");

        Self {
            access_secret,
            refresh_secret,
            access_token_expiry_mins,
            refresh_token_expiry_mins,
        }
    }
}

/// Generate an access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    sign(user_id, &config.access_secret, config.access_token_expiry_mins)
}

/// Generate a refresh token for the given user.
pub fn generate_refresh_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    sign(user_id, &config.refresh_secret, config.refresh_token_expiry_mins)
}

/// Validate and decode an access token, returning the embedded [`Claims`].
pub fn validate_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    verify(token, &config.access_secret)
}

/// Validate and decode a refresh token, returning the embedded [`Claims`].
pub fn validate_refresh_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    verify(token, &config.refresh_secret)
}

fn sign(
    user_id: DbId,
    secret: &str,
    expiry_mins: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        exp: now + expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn verify(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
