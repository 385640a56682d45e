//! List Addresses Use Case

use std::sync::Arc;

use crate::domain::gateways::{AddressRepository, UserRepository};
use crate::domain::models::address::{Address, AddressId, ADDRESS_LIMIT};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// A user's live addresses plus book-level metadata
#[derive(Debug, Clone)]
pub struct AddressBook {
    pub user_id: UserId,
    pub default_address_id: Option<AddressId>,
    pub limit: usize,
    pub addresses: Vec<Address>,
}

pub struct ListAddressesUseCase {
    address_repository: Arc<dyn AddressRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl ListAddressesUseCase {
    #[must_use]
    pub fn new(address_repository: Arc<dyn AddressRepository>, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            address_repository,
            user_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user no longer exists.
    pub async fn execute(&self, user_id: UserId) -> Result<AddressBook, UseCaseError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", user_id))?;
        let addresses = self.address_repository.list_active(user_id).await?;

        tracing::debug!(user_id = %user_id, count = addresses.len(), "Listed addresses");
        Ok(AddressBook {
            user_id,
            default_address_id: user.default_address_id(),
            limit: ADDRESS_LIMIT,
            addresses,
        })
    }
}
