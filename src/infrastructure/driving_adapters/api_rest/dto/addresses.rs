//! Address DTOs
//!
//! Area ids are validated for shape here; hierarchy consistency is checked
//! by the use cases against stored areas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::addresses::AddressBook;
use crate::domain::models::address::{Address, AddressData};

use super::{blank_as_none, validate_mobile};

/// DTO for creating or fully updating an address
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddressDto {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 20, message = "title must be at most 20 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 20, message = "receiver must be between 1 and 20 characters"))]
    pub receiver: String,

    #[validate(range(min = 1, message = "province_id is required"))]
    pub province_id: i64,

    #[validate(range(min = 1, message = "city_id is required"))]
    pub city_id: i64,

    #[validate(range(min = 1, message = "district_id is required"))]
    pub district_id: i64,

    #[validate(length(min = 1, max = 50, message = "place must be between 1 and 50 characters"))]
    pub place: String,

    #[validate(custom(function = "validate_mobile"))]
    pub mobile: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 20, message = "tel must be at most 20 characters"))]
    pub tel: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
}

impl From<AddressDto> for AddressData {
    fn from(dto: AddressDto) -> Self {
        Self {
            title: dto.title,
            receiver: dto.receiver,
            province_id: dto.province_id,
            city_id: dto.city_id,
            district_id: dto.district_id,
            place: dto.place,
            mobile: dto.mobile,
            tel: dto.tel,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AddressTitleDto {
    #[validate(length(min = 1, max = 20, message = "title must be between 1 and 20 characters"))]
    pub title: String,
}

/// Address response DTO
#[derive(Debug, Clone, Serialize)]
pub struct AddressResponseDto {
    pub id: i64,
    pub title: String,
    pub receiver: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub province_id: i64,
    pub city_id: i64,
    pub district_id: i64,
    pub place: String,
    pub mobile: String,
    pub tel: Option<String>,
    pub email: Option<String>,
}

impl From<&Address> for AddressResponseDto {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id().value(),
            title: address.title().to_string(),
            receiver: address.receiver().to_string(),
            province: address.province().name.clone(),
            city: address.city().name.clone(),
            district: address.district().name.clone(),
            province_id: address.province().id,
            city_id: address.city().id,
            district_id: address.district().id,
            place: address.place().to_string(),
            mobile: address.mobile().to_string(),
            tel: address.tel().map(str::to_string),
            email: address.email().map(str::to_string),
        }
    }
}

impl From<Address> for AddressResponseDto {
    fn from(address: Address) -> Self {
        Self::from(&address)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressBookResponseDto {
    pub user_id: i64,
    pub default_address_id: Option<i64>,
    pub limit: usize,
    pub addresses: Vec<AddressResponseDto>,
}

impl From<AddressBook> for AddressBookResponseDto {
    fn from(book: AddressBook) -> Self {
        Self {
            user_id: book.user_id.value(),
            default_address_id: book.default_address_id.map(|id| id.value()),
            limit: book.limit,
            addresses: book.addresses.iter().map(AddressResponseDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> AddressDto {
        AddressDto {
            title: None,
            receiver: "Zhang San".into(),
            province_id: 110_000,
            city_id: 110_100,
            district_id: 110_101,
            place: "1 Chang'an Ave".into(),
            mobile: "13800138000".into(),
            tel: None,
            email: None,
        }
    }

    #[test]
    fn test_address_dto_valid() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_address_dto_invalid() {
        let dto = AddressDto {
            receiver: String::new(),
            province_id: 0,
            mobile: "555".into(),
            email: Some("nope".into()),
            ..dto()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["receiver", "province_id", "mobile", "email"] {
            assert!(fields.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let json = r#"{
            "title": "",
            "receiver": "Zhang San",
            "province_id": 110000,
            "city_id": 110100,
            "district_id": 110101,
            "place": "1 Chang'an Ave",
            "mobile": "13800138000",
            "tel": "  ",
            "email": ""
        }"#;
        let dto: AddressDto = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_ok());

        let data = AddressData::from(dto);
        assert_eq!(data.title, None);
        assert_eq!(data.tel, None);
        assert_eq!(data.email, None);
        assert_eq!(data.effective_title(), "Zhang San");
    }

    #[test]
    fn test_missing_optionals_deserialize() {
        let json = r#"{
            "receiver": "Zhang San",
            "province_id": 110000,
            "city_id": 110100,
            "district_id": 110101,
            "place": "1 Chang'an Ave",
            "mobile": "13800138000"
        }"#;
        let dto: AddressDto = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.email, None);
    }
}
