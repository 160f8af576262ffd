//! Delivery seam for one-time passcodes.

use async_trait::async_trait;

use aynbeauty_core::error::AppError;

/// Delivers a plaintext one-time passcode to a user.
///
/// Real SMS or email delivery lives behind this trait; the application
/// only ever sees "deliver this code to this address".
#[async_trait]
pub trait OtpDelivery: Send + Sync + std::fmt::Debug + 'static {
    /// Delivers `code` to the account at `email`.
    async fn deliver(&self, email: &str, code: &str) -> Result<(), AppError>;
}

/// Development delivery that writes codes to the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogOtpDelivery;

#[async_trait]
impl OtpDelivery for LogOtpDelivery {
    async fn deliver(&self, email: &str, code: &str) -> Result<(), AppError> {
        tracing::info!(email, code, "One-time passcode issued (log delivery)");
        Ok(())
    }
}
