//! Outbound notification and publishing gateways

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::models::content::IndexPage;
use crate::shared::errors::ServiceError;

/// Delivers SMS codes and verification e-mails
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_sms_code(&self, mobile: &str, code: &str, expires_minutes: u64) -> Result<(), ServiceError>;

    async fn send_verification_email(&self, email: &str, verify_url: &str) -> Result<(), ServiceError>;
}

/// Renders and stores the static home page
#[async_trait]
pub trait PagePublisher: Send + Sync {
    /// Returns the path of the written file
    async fn publish_index(&self, page: &IndexPage) -> Result<PathBuf, ServiceError>;
}
