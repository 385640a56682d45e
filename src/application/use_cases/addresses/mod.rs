//! Address Book Use Cases
//!
//! Every operation is scoped to the authenticated user: another user's
//! address, or a deleted one, is reported as not found.

mod create_address;
mod delete_address;
mod list_addresses;
mod set_default_address;
mod update_address;
mod update_address_title;

pub use create_address::CreateAddressUseCase;
pub use delete_address::DeleteAddressUseCase;
pub use list_addresses::{AddressBook, ListAddressesUseCase};
pub use set_default_address::SetDefaultAddressUseCase;
pub use update_address::UpdateAddressUseCase;
pub use update_address_title::UpdateAddressTitleUseCase;

use crate::domain::gateways::{AddressRepository, AreaRepository};
use crate::domain::models::address::{Address, AddressData, AddressId};
use crate::domain::models::user::UserId;
use crate::shared::errors::{DomainError, UseCaseError};

/// Load an address the user may see
async fn find_owned_address(
    repository: &dyn AddressRepository,
    user_id: UserId,
    id: AddressId,
) -> Result<Address, UseCaseError> {
    repository
        .find_by_id(id)
        .await?
        .filter(|address| address.is_visible_to(user_id))
        .ok_or_else(|| {
            tracing::warn!(user_id = %user_id, address_id = %id, "Address not found");
            UseCaseError::not_found("Address", id)
        })
}

/// Province, city and district must exist and nest in that order
async fn check_area_hierarchy(repository: &dyn AreaRepository, data: &AddressData) -> Result<(), UseCaseError> {
    let province = repository.find_by_id(data.province_id).await?;
    let city = repository.find_by_id(data.city_id).await?;
    let district = repository.find_by_id(data.district_id).await?;

    match (province, city, district) {
        (Some(p), Some(c), Some(d)) if p.is_province() && c.is_child_of(p.id) && d.is_child_of(c.id) => Ok(()),
        (Some(_), Some(_), Some(_)) => Err(DomainError::InvalidAreaHierarchy(format!(
            "district {} is not in city {} of province {}",
            data.district_id, data.city_id, data.province_id
        ))
        .into()),
        _ => Err(DomainError::InvalidAreaHierarchy("unknown area".to_string()).into()),
    }
}
