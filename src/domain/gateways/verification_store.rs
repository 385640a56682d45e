//! SMS Verification Code Store Gateway

use std::time::Duration;

use async_trait::async_trait;

use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Whether a code was sent to `mobile` within the resend interval
    async fn is_send_locked(&self, mobile: &str) -> Result<bool, RepositoryError>;

    /// Store a code and the resend lock together
    async fn save_sms_code(
        &self,
        mobile: &str,
        code: &str,
        code_ttl: Duration,
        lock_ttl: Duration,
    ) -> Result<(), RepositoryError>;

    async fn get_sms_code(&self, mobile: &str) -> Result<Option<String>, RepositoryError>;

    async fn delete_sms_code(&self, mobile: &str) -> Result<(), RepositoryError>;
}
