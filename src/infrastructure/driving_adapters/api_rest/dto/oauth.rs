//! QQ Login DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::application::use_cases::oauth::BindQqData;

use super::validate_mobile;

#[derive(Debug, Clone, Deserialize)]
pub struct QqLoginUrlQuery {
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QqLoginUrlResponseDto {
    pub login_url: String,
}

/// Query string QQ redirects back with
#[derive(Debug, Clone, Deserialize)]
pub struct QqCallbackQuery {
    pub code: Option<String>,
}

/// Returned when the QQ account is not bound yet
#[derive(Debug, Clone, Serialize)]
pub struct QqBindRequiredDto {
    pub access_token: String,
}

/// Form binding a QQ account to a (possibly new) local user
#[derive(Debug, Clone, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct BindQqDto {
    #[validate(custom(function = "validate_mobile"))]
    pub mobile: String,

    #[validate(length(min = 8, max = 20, message = "password must be between 8 and 20 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "sms_code is required"))]
    pub sms_code: String,

    #[validate(length(min = 1, message = "access_token is required"))]
    pub access_token: String,
}

impl From<&BindQqDto> for BindQqData {
    fn from(dto: &BindQqDto) -> Self {
        Self {
            mobile: dto.mobile.clone(),
            password: dto.password.clone(),
            sms_code: dto.sms_code.clone(),
            access_token: dto.access_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_dto_validation() {
        let mut dto = BindQqDto {
            mobile: "13800138000".into(),
            password: "secret123".into(),
            sms_code: "123456".into(),
            access_token: "token".into(),
        };
        assert!(dto.validate().is_ok());

        dto.mobile = "138".into();
        dto.access_token = String::new();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mobile"));
        assert!(errors.field_errors().contains_key("access_token"));
    }
}
