//! Count Username Use Case
//!
//! Lets the registration form check whether a username is taken.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::shared::errors::UseCaseError;

/// Use case for counting users with a given username
pub struct CountUsernameUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CountUsernameUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &str) -> Result<i64, UseCaseError> {
        tracing::debug!(username = %username, "Counting username");
        Ok(self.user_repository.count_by_username(username).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::user_repository::MockUserRepository;

    #[tokio::test]
    async fn should_return_repository_count() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_by_username()
            .withf(|username| username == "alice01")
            .times(1)
            .returning(|_| Ok(1));

        let use_case = CountUsernameUseCase::new(Arc::new(repo));
        assert_eq!(use_case.execute("alice01").await.unwrap(), 1);
    }
}
