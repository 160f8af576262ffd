//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered AynBeauty customer or administrator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Phone number in international format.
    pub phone: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// User role (RBAC).
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned role.
    pub role: UserRole,
}
