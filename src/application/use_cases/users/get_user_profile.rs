//! Get User Profile Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::UseCaseError;

pub struct GetUserProfileUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserProfileUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the account no longer exists.
    pub async fn execute(&self, user_id: UserId) -> Result<User, UseCaseError> {
        self.user_repository.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Authenticated user not found");
            UseCaseError::not_found("User", user_id)
        })
    }
}
