//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::address::AddressId;
use crate::domain::models::user::{NewUser, User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Find a user by mobile number
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, RepositoryError>;

    /// Count users with the given username (0 or 1)
    async fn count_by_username(&self, username: &str) -> Result<i64, RepositoryError>;

    /// Count users with the given mobile number (0 or 1)
    async fn count_by_mobile(&self, mobile: &str) -> Result<i64, RepositoryError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Persist e-mail fields of an existing user
    async fn update_email(&self, user: &User) -> Result<Option<User>, RepositoryError>;

    /// Set or clear the default address
    async fn set_default_address(
        &self,
        id: UserId,
        address_id: Option<AddressId>,
    ) -> Result<bool, RepositoryError>;
}
