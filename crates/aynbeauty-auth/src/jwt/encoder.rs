//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use aynbeauty_core::config::AuthConfig;
use aynbeauty_core::error::AppError;
use aynbeauty_entity::user::User;

use super::claims::Claims;

/// Creates signed JWT bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed bearer token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.jwt_ttl_hours as i64,
        }
    }

    /// Issues a signed token for the given user.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
