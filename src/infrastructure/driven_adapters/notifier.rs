//! Logging Notifier
//!
//! Stands in for the SMS gateway and mail server: every message becomes a
//! structured log line.

use async_trait::async_trait;

use crate::domain::gateways::Notifier;
use crate::shared::errors::ServiceError;

#[derive(Debug, Default)]
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send_sms_code(&self, mobile: &str, code: &str, expires_minutes: u64) -> Result<(), ServiceError> {
        tracing::info!(mobile, code, expires_minutes, "SMS code sent");
        Ok(())
    }

    async fn send_verification_email(&self, email: &str, verify_url: &str) -> Result<(), ServiceError> {
        tracing::info!(email, verify_url, "Verification email sent");
        Ok(())
    }
}
