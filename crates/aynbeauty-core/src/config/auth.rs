//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub jwt_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// One-time passcode TTL in minutes.
    #[serde(default = "default_otp_ttl")]
    pub otp_ttl_minutes: u64,
    /// Minimum seconds between OTP requests for the same email.
    #[serde(default = "default_otp_cooldown")]
    pub otp_resend_cooldown_seconds: u64,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}

fn default_otp_ttl() -> u64 {
    10
}

fn default_otp_cooldown() -> u64 {
    30
}
