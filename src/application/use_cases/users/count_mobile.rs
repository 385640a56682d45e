//! Count Mobile Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::shared::errors::UseCaseError;

/// Use case for counting users registered with a mobile number
pub struct CountMobileUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CountMobileUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, mobile: &str) -> Result<i64, UseCaseError> {
        tracing::debug!(mobile = %mobile, "Counting mobile");
        Ok(self.user_repository.count_by_mobile(mobile).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::user_repository::MockUserRepository;

    #[tokio::test]
    async fn should_return_zero_for_unknown_mobile() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_by_mobile().returning(|_| Ok(0));

        let use_case = CountMobileUseCase::new(Arc::new(repo));
        assert_eq!(use_case.execute("13800138000").await.unwrap(), 0);
    }
}
