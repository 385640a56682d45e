//! Update Email Use Case
//!
//! Stores a new e-mail address for the current user and mails a
//! verification link.

use std::sync::Arc;

use crate::domain::gateways::{Notifier, TokenService, UserRepository};
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::UseCaseError;

pub struct UpdateEmailUseCase {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<dyn TokenService>,
    notifier: Arc<dyn Notifier>,
    verify_url: String,
}

impl UpdateEmailUseCase {
    /// `verify_url` is the page the link points at; the token is appended as a query parameter
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        token_service: Arc<dyn TokenService>,
        notifier: Arc<dyn Notifier>,
        verify_url: String,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            notifier,
            verify_url,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user no longer exists.
    /// Returns `UseCaseError::Service` if signing or sending the link fails.
    pub async fn execute(&self, user_id: UserId, email: String) -> Result<User, UseCaseError> {
        tracing::info!(user_id = %user_id, "Updating email");

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", user_id))?;

        let updated = self
            .user_repository
            .update_email(&user.with_email(email.clone()))
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", user_id))?;

        let token = self.token_service.sign_email_verification(user_id, &email)?;
        let link = format!("{}?token={}", self.verify_url, token);
        self.notifier.send_verification_email(&email, &link).await?;

        tracing::info!(user_id = %user_id, "Verification email sent");
        Ok(updated)
    }
}
