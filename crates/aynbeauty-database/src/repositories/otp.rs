//! OTP challenge repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::otp::OtpChallenge;

/// Repository for one-time passcode challenges.
#[derive(Debug, Clone)]
pub struct OtpRepository {
    pool: PgPool,
}

impl OtpRepository {
    /// Create a new OTP repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issue a new challenge, retiring any still-pending ones for the user.
    pub async fn create(
        &self,
        user_id: i64,
        code_hash: &str,
        purpose: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<OtpChallenge> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "UPDATE otp_challenges SET consumed_at = NOW() \
             WHERE user_id = $1 AND consumed_at IS NULL",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to retire old challenges", e)
        })?;

        let challenge = sqlx::query_as::<_, OtpChallenge>(
            "INSERT INTO otp_challenges (user_id, code_hash, purpose, expires_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user_id)
        .bind(code_hash)
        .bind(purpose)
        .bind(expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create challenge", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit challenge", e)
        })?;

        Ok(challenge)
    }

    /// The user's latest unredeemed challenge, if any.
    pub async fn find_latest_pending(&self, user_id: i64) -> AppResult<Option<OtpChallenge>> {
        sqlx::query_as::<_, OtpChallenge>(
            "SELECT * FROM otp_challenges \
             WHERE user_id = $1 AND consumed_at IS NULL \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find challenge", e))
    }

    /// When the user last requested a code, for resend throttling.
    pub async fn last_requested_at(&self, user_id: i64) -> AppResult<Option<DateTime<Utc>>> {
        sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            "SELECT MAX(created_at) FROM otp_challenges WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check request time", e)
        })
    }

    /// Redeem a challenge. Returns `false` when it was already redeemed,
    /// so a code can never be used twice even under concurrent verifies.
    pub async fn consume(&self, challenge_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE otp_challenges SET consumed_at = NOW() \
             WHERE id = $1 AND consumed_at IS NULL",
        )
        .bind(challenge_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to consume challenge", e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
