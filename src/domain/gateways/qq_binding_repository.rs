//! QQ Binding Repository Gateway

use async_trait::async_trait;

use crate::domain::models::oauth::QqBinding;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Persistence of openid → user bindings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QqBindingRepository: Send + Sync {
    async fn find_by_openid(&self, openid: &str) -> Result<Option<QqBinding>, RepositoryError>;

    async fn create(&self, user_id: UserId, openid: &str) -> Result<QqBinding, RepositoryError>;
}
