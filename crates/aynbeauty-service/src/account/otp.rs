//! One-time passcode login flow.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};

use aynbeauty_auth::jwt::{IssuedToken, JwtEncoder};
use aynbeauty_auth::otp::OtpGenerator;
use aynbeauty_core::config::AuthConfig;
use aynbeauty_core::error::AppError;
use aynbeauty_database::repositories::otp::OtpRepository;
use aynbeauty_database::repositories::user::UserRepository;
use aynbeauty_entity::user::User;

use super::delivery::OtpDelivery;

/// Challenge purpose recorded with every issued code.
const LOGIN_PURPOSE: &str = "login";

/// Message returned for every failed verification path. One message for
/// all of them, so responses never reveal which step failed.
const INVALID_CODE: &str = "Invalid or expired code";

/// Issues and verifies one-time passcodes for passwordless login.
#[derive(Clone)]
pub struct OtpService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// OTP challenge repository.
    otp_repo: Arc<OtpRepository>,
    /// Code generator and hasher.
    generator: OtpGenerator,
    /// JWT encoder for issuing tokens after verification.
    encoder: Arc<JwtEncoder>,
    /// Delivery channel for plaintext codes.
    delivery: Arc<dyn OtpDelivery>,
    /// Code lifetime in minutes.
    ttl_minutes: i64,
    /// Minimum seconds between requests for the same account.
    resend_cooldown_seconds: i64,
}

impl std::fmt::Debug for OtpService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpService")
            .field("ttl_minutes", &self.ttl_minutes)
            .field("resend_cooldown_seconds", &self.resend_cooldown_seconds)
            .finish()
    }
}

impl OtpService {
    /// Creates a new OTP service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        otp_repo: Arc<OtpRepository>,
        encoder: Arc<JwtEncoder>,
        delivery: Arc<dyn OtpDelivery>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            otp_repo,
            generator: OtpGenerator::new(),
            encoder,
            delivery,
            ttl_minutes: config.otp_ttl_minutes as i64,
            resend_cooldown_seconds: config.otp_resend_cooldown_seconds as i64,
        }
    }

    /// Issues a fresh code for the account at `email` and hands it to the
    /// delivery channel.
    ///
    /// Unknown emails return `Ok(())` without doing anything, so the
    /// endpoint response never reveals whether an account exists.
    pub async fn request_code(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            debug!("Passcode requested for unknown email");
            return Ok(());
        };

        if let Some(last) = self.otp_repo.last_requested_at(user.id).await? {
            let elapsed = Utc::now() - last;
            if elapsed < Duration::seconds(self.resend_cooldown_seconds) {
                return Err(AppError::rate_limit(
                    "Please wait before requesting another code",
                ));
            }
        }

        let otp = self.generator.generate();
        let expires_at = Utc::now() + Duration::minutes(self.ttl_minutes);

        self.otp_repo
            .create(user.id, &otp.code_hash, LOGIN_PURPOSE, expires_at)
            .await?;

        self.delivery.deliver(&user.email, &otp.code).await?;

        info!(user_id = user.id, "Issued one-time passcode");
        Ok(())
    }

    /// Verifies a submitted code and issues a login token.
    ///
    /// Codes are single use: the challenge is consumed before the token
    /// is issued, and a second submission of the same code fails.
    pub async fn verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(User, IssuedToken), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_CODE))?;

        let challenge = self
            .otp_repo
            .find_latest_pending(user.id)
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_CODE))?;

        if !challenge.is_usable(Utc::now()) {
            return Err(AppError::authentication(INVALID_CODE));
        }

        if !self.generator.verify(code, &challenge.code_hash) {
            return Err(AppError::authentication(INVALID_CODE));
        }

        let consumed = self.otp_repo.consume(challenge.id).await?;
        if !consumed {
            return Err(AppError::authentication(INVALID_CODE));
        }

        self.user_repo.touch_last_login(user.id).await?;
        let token = self.encoder.issue(&user)?;

        info!(user_id = user.id, "Passcode login succeeded");
        Ok((user, token))
    }
}
