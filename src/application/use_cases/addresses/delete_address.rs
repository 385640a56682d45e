//! Delete Address Use Case (Soft Delete)

use std::sync::Arc;

use crate::domain::gateways::{AddressRepository, UserRepository};
use crate::domain::models::address::AddressId;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

use super::find_owned_address;

/// Flags an address as deleted; clears the default if it pointed there
pub struct DeleteAddressUseCase {
    address_repository: Arc<dyn AddressRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl DeleteAddressUseCase {
    #[must_use]
    pub fn new(address_repository: Arc<dyn AddressRepository>, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            address_repository,
            user_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the address is not the user's.
    pub async fn execute(&self, user_id: UserId, id: AddressId) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %user_id, address_id = %id, "Soft deleting address");

        find_owned_address(self.address_repository.as_ref(), user_id, id).await?;
        if !self.address_repository.soft_delete(id).await? {
            return Err(UseCaseError::not_found("Address", id));
        }

        let user = self.user_repository.find_by_id(user_id).await?;
        if user.is_some_and(|u| u.default_address_id() == Some(id)) {
            self.user_repository.set_default_address(user_id, None).await?;
            tracing::debug!(user_id = %user_id, "Cleared default address");
        }

        tracing::info!(user_id = %user_id, address_id = %id, "Address soft deleted");
        Ok(())
    }
}
