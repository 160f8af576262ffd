//! JWT claims structure embedded in every bearer token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aynbeauty_entity::user::UserRole;

/// JWT claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: i64,
    /// Email at the time of token issuance.
    pub email: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> i64 {
        self.sub
    }

    /// Whether the token belongs to an admin account.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
