//! Login Use Case
//!
//! Authenticates with a username or a mobile number plus password.

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, TokenService, UserRepository};
use crate::domain::models::user::{is_mobile, User};
use crate::shared::errors::UseCaseError;

/// A logged-in user and the access token issued for them
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
}

/// Use case for password login
pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl LoginUseCase {
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Execute the use case. `account` is tried as a mobile number first
    /// when it has the shape of one, as a username otherwise.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` for unknown accounts or a wrong password.
    pub async fn execute(&self, account: &str, password: &str) -> Result<LoginResult, UseCaseError> {
        let user = if is_mobile(account) {
            self.user_repository.find_by_mobile(account).await?
        } else {
            self.user_repository.find_by_username(account).await?
        };

        let Some(user) = user else {
            tracing::warn!(account = %account, "Login for unknown account");
            return Err(UseCaseError::Unauthorized("Invalid username or password".to_string()));
        };

        if !self.password_hasher.verify(password, user.password_hash())? {
            tracing::warn!(user_id = %user.id(), "Login with wrong password");
            return Err(UseCaseError::Unauthorized("Invalid username or password".to_string()));
        }

        let token = self.token_service.issue_access_token(&user)?;
        tracing::info!(user_id = %user.id(), "User logged in");
        Ok(LoginResult { user, token })
    }
}
