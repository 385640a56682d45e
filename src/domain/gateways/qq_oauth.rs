//! QQ OAuth Provider Gateway

use async_trait::async_trait;

use crate::domain::models::oauth::QqAccessToken;
use crate::shared::errors::ServiceError;

/// Client for the QQ authorization-code flow
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QqOAuthClient: Send + Sync {
    /// Authorization page URL carrying `state` back to the callback
    fn login_url(&self, state: &str) -> String;

    async fn exchange_code(&self, code: &str) -> Result<QqAccessToken, ServiceError>;

    async fn fetch_openid(&self, token: &QqAccessToken) -> Result<String, ServiceError>;
}
