//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod addresses;
pub mod areas;
pub mod cart;
pub mod histories;
pub mod oauth;
pub mod payments;
pub mod users;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::models::user::is_mobile;

pub use addresses::{AddressBookResponseDto, AddressDto, AddressResponseDto, AddressTitleDto};
pub use areas::{AreaDetailResponseDto, AreaResponseDto};
pub use cart::{decode_cart_cookie, encode_cart_cookie, CART_COOKIE};
pub use histories::{BrowseHistoryDto, HistorySkuResponseDto};
pub use oauth::{BindQqDto, QqBindRequiredDto, QqCallbackQuery, QqLoginUrlQuery, QqLoginUrlResponseDto};
pub use payments::{PaymentResponseDto, RecordPaymentDto, TradeIdResponseDto};
pub use users::{
    EmailResponseDto, LoginDto, LoginResponseDto, MobileCountResponseDto, RegisterResponseDto, RegisterUserDto,
    UpdateEmailDto, UserProfileResponseDto, UsernameCountResponseDto, VerifyEmailQuery,
};

lazy_static! {
    /// Usernames: letters, digits, `_` and `-`
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_-]{5,20}$").expect("valid regex");
}

/// Plain `{"message": ...}` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}

/// Reads an optional string, treating blank input as absent.
///
/// Form clients send `""` for untouched optional fields.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Validates a mainland mobile number
pub(crate) fn validate_mobile(mobile: &str) -> Result<(), validator::ValidationError> {
    if is_mobile(mobile) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("mobile");
        error.message = Some("Invalid mobile number".into());
        Err(error)
    }
}

/// Validates a username: 5-20 word characters and not only digits
pub(crate) fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    if !USERNAME_REGEX.is_match(username) {
        let mut error = validator::ValidationError::new("username");
        error.message = Some("Username must be 5-20 letters, digits, '_' or '-'".into());
        return Err(error);
    }
    if username.chars().all(|c| c.is_ascii_digit()) {
        let mut error = validator::ValidationError::new("username");
        error.message = Some("Username cannot be all digits".into());
        return Err(error);
    }
    Ok(())
}
