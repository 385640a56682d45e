//! Verify Email Use Case
//!
//! Activates the e-mail address named in a signed verification token.

use std::sync::Arc;

use crate::domain::gateways::{TokenService, UserRepository};
use crate::shared::errors::UseCaseError;

pub struct VerifyEmailUseCase {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<dyn TokenService>,
}

impl VerifyEmailUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<dyn TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the token is invalid, expired, or
    /// names an address the user has since replaced.
    pub async fn execute(&self, token: &str) -> Result<(), UseCaseError> {
        let (user_id, email) = self
            .token_service
            .verify_email_token(token)
            .ok_or_else(|| UseCaseError::invalid("token: invalid or expired verification link"))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UseCaseError::invalid("token: invalid or expired verification link"))?;

        if user.email() != Some(email.as_str()) {
            tracing::warn!(user_id = %user_id, "Verification link for a replaced email");
            return Err(UseCaseError::invalid("token: invalid or expired verification link"));
        }

        if !user.email_active() {
            self.user_repository.update_email(&user.activate_email()).await?;
        }
        tracing::info!(user_id = %user_id, "Email verified");
        Ok(())
    }
}
