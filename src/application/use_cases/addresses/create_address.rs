//! Create Address Use Case

use std::sync::Arc;

use crate::domain::gateways::{AddressRepository, AreaRepository, UserRepository};
use crate::domain::models::address::{Address, AddressData, ADDRESS_LIMIT};
use crate::domain::models::user::UserId;
use crate::shared::errors::{DomainError, UseCaseError};

use super::check_area_hierarchy;

/// Use case for adding an address to the book
pub struct CreateAddressUseCase {
    address_repository: Arc<dyn AddressRepository>,
    area_repository: Arc<dyn AreaRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CreateAddressUseCase {
    #[must_use]
    pub fn new(
        address_repository: Arc<dyn AddressRepository>,
        area_repository: Arc<dyn AreaRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            address_repository,
            area_repository,
            user_repository,
        }
    }

    /// Execute the use case. The first address of a user becomes the default.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the book is full or the areas do not nest.
    pub async fn execute(&self, user_id: UserId, data: AddressData) -> Result<Address, UseCaseError> {
        tracing::info!(user_id = %user_id, "Creating address");

        let count = self.address_repository.count_active(user_id).await?;
        if usize::try_from(count).unwrap_or(usize::MAX) >= ADDRESS_LIMIT {
            tracing::warn!(user_id = %user_id, count, "Address limit reached");
            return Err(DomainError::AddressLimitReached(ADDRESS_LIMIT).into());
        }

        check_area_hierarchy(self.area_repository.as_ref(), &data).await?;

        let address = self.address_repository.create(user_id, &data).await?;

        let user = self.user_repository.find_by_id(user_id).await?;
        if user.is_some_and(|u| u.default_address_id().is_none()) {
            self.user_repository
                .set_default_address(user_id, Some(address.id()))
                .await?;
        }

        tracing::info!(user_id = %user_id, address_id = %address.id(), "Address created");
        Ok(address)
    }
}
