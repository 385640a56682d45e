//! Address Repository Gateway

use async_trait::async_trait;

use crate::domain::models::address::{Address, AddressData, AddressId};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Repository trait for address book persistence
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Find an address by ID, deleted or not
    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError>;

    /// Live addresses of a user, most recently updated first
    async fn list_active(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError>;

    /// Number of live addresses of a user
    async fn count_active(&self, user_id: UserId) -> Result<i64, RepositoryError>;

    /// Create a new address
    async fn create(&self, user_id: UserId, data: &AddressData) -> Result<Address, RepositoryError>;

    /// Replace the editable fields of an address
    async fn update(&self, id: AddressId, data: &AddressData) -> Result<Option<Address>, RepositoryError>;

    /// Change only the title
    async fn update_title(&self, id: AddressId, title: &str) -> Result<bool, RepositoryError>;

    /// Logical delete (sets is_deleted=true)
    async fn soft_delete(&self, id: AddressId) -> Result<bool, RepositoryError>;
}
