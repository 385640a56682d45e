//! Set Default Address Use Case

use std::sync::Arc;

use crate::domain::gateways::{AddressRepository, UserRepository};
use crate::domain::models::address::AddressId;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

use super::find_owned_address;

pub struct SetDefaultAddressUseCase {
    address_repository: Arc<dyn AddressRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl SetDefaultAddressUseCase {
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
        find_owned_address(self.address_repository.as_ref(), user_id, id).await?;

        if !self.user_repository.set_default_address(user_id, Some(id)).await? {
            return Err(UseCaseError::not_found("User", user_id));
        }
        tracing::info!(user_id = %user_id, address_id = %id, "Default address set");
        Ok(())
    }
}
