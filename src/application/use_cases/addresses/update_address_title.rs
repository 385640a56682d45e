//! Update Address Title Use Case

use std::sync::Arc;

use crate::domain::gateways::AddressRepository;
use crate::domain::models::address::AddressId;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

use super::find_owned_address;

pub struct UpdateAddressTitleUseCase {
    address_repository: Arc<dyn AddressRepository>,
}

impl UpdateAddressTitleUseCase {
    #[must_use]
    pub fn new(address_repository: Arc<dyn AddressRepository>) -> Self {
        Self { address_repository }
    }

    /// Returns the stored title
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the address is not the user's.
    pub async fn execute(&self, user_id: UserId, id: AddressId, title: String) -> Result<String, UseCaseError> {
        find_owned_address(self.address_repository.as_ref(), user_id, id).await?;

        if !self.address_repository.update_title(id, &title).await? {
            return Err(UseCaseError::not_found("Address", id));
        }
        tracing::info!(user_id = %user_id, address_id = %id, "Address title updated");
        Ok(title)
    }
}
