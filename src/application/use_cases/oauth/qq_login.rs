//! QQ Login Use Case
//!
//! Authorization code → access token → openid, then either log in the bound
//! user or hand back a bind token.

use std::sync::Arc;

use crate::application::use_cases::users::LoginResult;
use crate::domain::gateways::{QqBindingRepository, QqOAuthClient, TokenService, UserRepository};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Result of the QQ callback
#[derive(Debug)]
pub enum QqLoginOutcome {
    /// The openid is bound to a user, who is now logged in
    LoggedIn(LoginResult),
    /// The openid is unknown; the client must submit the bind form with this token
    BindRequired { access_token: String },
}

pub struct QqLoginUseCase {
    qq_client: Arc<dyn QqOAuthClient>,
    binding_repository: Arc<dyn QqBindingRepository>,
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<dyn TokenService>,
}

impl QqLoginUseCase {
    #[must_use]
    pub fn new(
        qq_client: Arc<dyn QqOAuthClient>,
        binding_repository: Arc<dyn QqBindingRepository>,
        user_repository: Arc<dyn UserRepository>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            qq_client,
            binding_repository,
            user_repository,
            token_service,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Service` when QQ rejects the code or is unreachable.
    pub async fn execute(&self, code: &str) -> Result<QqLoginOutcome, UseCaseError> {
        let access_token = self.qq_client.exchange_code(code).await?;
        let openid = self.qq_client.fetch_openid(&access_token).await?;
        tracing::debug!(openid = %openid, "Resolved QQ openid");

        let Some(binding) = self.binding_repository.find_by_openid(&openid).await? else {
            tracing::info!(openid = %openid, "QQ openid not bound, bind required");
            let access_token = self.token_service.sign_openid(&openid)?;
            return Ok(QqLoginOutcome::BindRequired { access_token });
        };

        let user = self
            .user_repository
            .find_by_id(binding.user_id)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("user {} of QQ binding {}", binding.user_id, binding.id))
            })?;
        let token = self.token_service.issue_access_token(&user)?;

        tracing::info!(user_id = %user.id(), "User logged in with QQ");
        Ok(QqLoginOutcome::LoggedIn(LoginResult { user, token }))
    }
}
