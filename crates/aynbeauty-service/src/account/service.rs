//! Account registration, password login, and profile access.

use std::sync::Arc;

use tracing::info;

use aynbeauty_auth::jwt::{IssuedToken, JwtEncoder};
use aynbeauty_auth::password::{PasswordHasher, PasswordValidator};
use aynbeauty_core::error::AppError;
use aynbeauty_database::repositories::user::UserRepository;
use aynbeauty_entity::user::{CreateUser, User, UserRole};

/// Message for every failed password login. Unknown email and wrong
/// password are indistinguishable to the caller.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Data for creating a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password, validated and hashed before storage.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number (optional).
    pub phone: Option<String>,
}

/// Handles registration, password login, and profile lookup.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT encoder.
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new customer account and signs them in.
    pub async fn register(&self, req: RegisterRequest) -> Result<(User, IssuedToken), AppError> {
        let email = req.email.trim().to_string();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                phone: req.phone.filter(|p| !p.trim().is_empty()),
                password_hash,
                first_name: req.first_name.trim().to_string(),
                last_name: req.last_name.trim().to_string(),
                role: UserRole::Customer,
            })
            .await?;

        let token = self.encoder.issue(&user)?;
        info!(user_id = user.id, "Account registered");

        Ok((user, token))
    }

    /// Verifies credentials and issues a login token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, IssuedToken), AppError> {
        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        self.user_repo.touch_last_login(user.id).await?;
        let token = self.encoder.issue(&user)?;

        info!(user_id = user.id, "Password login succeeded");
        Ok((user, token))
    }

    /// Loads the authenticated user's profile.
    pub async fn profile(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
