//! One-time passcode challenge entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A pending or consumed OTP challenge.
///
/// Only the SHA-256 hex digest of the code is stored; the plaintext code
/// exists solely in the delivery message.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OtpChallenge {
    /// Unique challenge identifier.
    pub id: i64,
    /// The user being authenticated.
    pub user_id: i64,
    /// SHA-256 hex digest of the 6-digit code.
    pub code_hash: String,
    /// What the code authorizes, currently always `login`.
    pub purpose: String,
    /// When the code stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// When the code was redeemed, if it has been.
    pub consumed_at: Option<DateTime<Utc>>,
    /// When the challenge was issued.
    pub created_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// Whether the challenge can still be redeemed at `now`.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.consumed_at.is_none() && now < self.expires_at
    }
}
