//! Send SMS Code Use Case
//!
//! Generates a six digit code, stores it with a resend lock and hands it to
//! the notifier.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::domain::gateways::{Notifier, VerificationStore};
use crate::domain::models::user::is_mobile;
use crate::shared::errors::UseCaseError;

/// How long a code stays valid
pub const SMS_CODE_EXPIRES: Duration = Duration::from_secs(300);

/// Minimum delay between two codes for the same number
pub const SMS_SEND_INTERVAL: Duration = Duration::from_secs(60);

pub struct SendSmsCodeUseCase {
    verification_store: Arc<dyn VerificationStore>,
    notifier: Arc<dyn Notifier>,
}

impl SendSmsCodeUseCase {
    #[must_use]
    pub fn new(verification_store: Arc<dyn VerificationStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            verification_store,
            notifier,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a malformed mobile number.
    /// Returns `UseCaseError::TooManyRequests` while the resend lock is held.
    pub async fn execute(&self, mobile: &str) -> Result<(), UseCaseError> {
        if !is_mobile(mobile) {
            return Err(UseCaseError::invalid("mobile: invalid mobile number"));
        }

        if self.verification_store.is_send_locked(mobile).await? {
            tracing::warn!(mobile = %mobile, "SMS code requested too frequently");
            return Err(UseCaseError::TooManyRequests(
                "SMS code was sent recently, try again later".to_string(),
            ));
        }

        let code = format!("{:06}", rand::rng().random_range(0..1_000_000));
        self.verification_store
            .save_sms_code(mobile, &code, SMS_CODE_EXPIRES, SMS_SEND_INTERVAL)
            .await?;

        self.notifier
            .send_sms_code(mobile, &code, SMS_CODE_EXPIRES.as_secs() / 60)
            .await?;

        tracing::info!(mobile = %mobile, "SMS code sent");
        Ok(())
    }
}
