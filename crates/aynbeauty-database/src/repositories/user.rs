//! User repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::user::{CreateUser, User};

/// Repository for user account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Create a new user account.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, phone, password_hash, first_name, last_name, role) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_lower_key") =>
            {
                AppError::conflict("An account with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Record a successful login.
    pub async fn touch_last_login(&self, user_id: i64) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_login_at = $2, updated_at = $2 WHERE id = $1")
            .bind(user_id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }
}
