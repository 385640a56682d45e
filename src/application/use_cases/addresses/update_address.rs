//! Update Address Use Case (PUT)

use std::sync::Arc;

use crate::domain::gateways::{AddressRepository, AreaRepository};
use crate::domain::models::address::{Address, AddressData, AddressId};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

use super::{check_area_hierarchy, find_owned_address};

pub struct UpdateAddressUseCase {
    address_repository: Arc<dyn AddressRepository>,
    area_repository: Arc<dyn AreaRepository>,
}

impl UpdateAddressUseCase {
    #[must_use]
    pub fn new(address_repository: Arc<dyn AddressRepository>, area_repository: Arc<dyn AreaRepository>) -> Self {
        Self {
            address_repository,
            area_repository,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the address is not the user's.
    /// Returns `UseCaseError::Domain` if the areas do not nest.
    pub async fn execute(&self, user_id: UserId, id: AddressId, data: AddressData) -> Result<Address, UseCaseError> {
        tracing::info!(user_id = %user_id, address_id = %id, "Updating address");

        find_owned_address(self.address_repository.as_ref(), user_id, id).await?;
        check_area_hierarchy(self.area_repository.as_ref(), &data).await?;

        self.address_repository
            .update(id, &data)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Address", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::addresses::fixtures::{address_data, seed_areas};
    use crate::infrastructure::driven_adapters::in_memory::InMemoryDatabase;

    #[tokio::test]
    async fn should_update_own_address() {
        let db = Arc::new(InMemoryDatabase::new());
        seed_areas(&db);
        let user = db.seed_user("alice01", "x", "13800138000");
        let address = db.seed_address(user.id(), &address_data("Zhang San"));

        let mut data = address_data("Zhang San");
        data.place = "2 Wangfujing St".to_string();
        data.title = Some("Office".to_string());

        let use_case = UpdateAddressUseCase::new(db.clone(), db.clone());
        let updated = use_case.execute(user.id(), address.id(), data).await.unwrap();

        assert_eq!(updated.place(), "2 Wangfujing St");
        assert_eq!(updated.title(), "Office");
    }

    #[tokio::test]
    async fn should_not_touch_other_users_address() {
        let db = Arc::new(InMemoryDatabase::new());
        seed_areas(&db);
        let owner = db.seed_user("alice01", "x", "13800138000");
        let other = db.seed_user("bob00001", "x", "13900139000");
        let address = db.seed_address(owner.id(), &address_data("Zhang San"));

        let use_case = UpdateAddressUseCase::new(db.clone(), db.clone());
        let result = use_case.execute(other.id(), address.id(), address_data("Li Si")).await;

        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }
}
