//! User DTOs
//!
//! Registration, login, profile and e-mail verification payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::application::use_cases::users::{LoginResult, RegisterUserData};
use crate::domain::models::user::User;

use super::{validate_mobile, validate_username};

/// Registration form
///
/// Passwords are wiped from memory when the DTO is dropped.
#[derive(Debug, Clone, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct RegisterUserDto {
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, max = 20, message = "password must be between 8 and 20 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password2: String,

    #[validate(custom(function = "validate_mobile"))]
    pub mobile: String,

    #[validate(length(min = 1, message = "sms_code is required"))]
    pub sms_code: String,

    #[serde(default)]
    pub allow: bool,
}

impl From<&RegisterUserDto> for RegisterUserData {
    fn from(dto: &RegisterUserDto) -> Self {
        Self {
            username: dto.username.clone(),
            password: dto.password.clone(),
            password2: dto.password2.clone(),
            mobile: dto.mobile.clone(),
            sms_code: dto.sms_code.clone(),
            allow: dto.allow,
        }
    }
}

/// Response for a successful registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponseDto {
    pub id: i64,
    pub username: String,
    pub mobile: String,
    pub token: String,
}

impl From<LoginResult> for RegisterResponseDto {
    fn from(result: LoginResult) -> Self {
        Self {
            id: result.user.id().value(),
            username: result.user.username().to_string(),
            mobile: result.user.mobile().to_string(),
            token: result.token,
        }
    }
}

/// Login form; `username` may also be a mobile number
#[derive(Debug, Clone, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Token plus identity, returned by every login flavour
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

impl From<LoginResult> for LoginResponseDto {
    fn from(result: LoginResult) -> Self {
        Self {
            user_id: result.user.id().value(),
            username: result.user.username().to_string(),
            token: result.token,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsernameCountResponseDto {
    pub username: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MobileCountResponseDto {
    pub mobile: String,
    pub count: i64,
}

/// Profile of the authenticated user
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponseDto {
    pub id: i64,
    pub username: String,
    pub mobile: String,
    pub email: Option<String>,
    pub email_active: bool,
}

impl From<User> for UserProfileResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
            mobile: user.mobile().to_string(),
            email: user.email().map(str::to_string),
            email_active: user.email_active(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmailDto {
    #[validate(email(message = "invalid email address"))]
    #[validate(length(max = 254, message = "email must be at most 254 characters"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailResponseDto {
    pub id: i64,
    pub email: Option<String>,
}

impl From<User> for EmailResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            email: user.email().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyEmailQuery {
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto() -> RegisterUserDto {
        RegisterUserDto {
            username: "alice01".into(),
            password: "secret123".into(),
            password2: "secret123".into(),
            mobile: "13800138000".into(),
            sms_code: "123456".into(),
            allow: true,
        }
    }

    #[test]
    fn test_register_dto_valid() {
        assert!(register_dto().validate().is_ok());
    }

    #[test]
    fn test_register_dto_password_mismatch() {
        let mut dto = register_dto();
        dto.password2 = "different1".into();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password2"));
    }

    #[test]
    fn test_register_dto_bad_fields() {
        let mut dto = register_dto();
        dto.username = "12345678".into();
        dto.password = "short".into();
        dto.password2 = "short".into();
        dto.mobile = "12345".into();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("mobile"));
    }

    #[test]
    fn test_register_dto_allow_defaults_to_false() {
        let dto: RegisterUserDto = serde_json::from_str(
            r#"{"username":"alice01","password":"secret123","password2":"secret123","mobile":"13800138000","sms_code":"1"}"#,
        )
        .unwrap();
        assert!(!dto.allow);
        assert!(!RegisterUserData::from(&dto).allow);
    }

    #[test]
    fn test_update_email_dto() {
        assert!(UpdateEmailDto { email: "a@example.com".into() }.validate().is_ok());
        assert!(UpdateEmailDto { email: "not-an-email".into() }.validate().is_err());
    }

    #[test]
    fn test_login_dto_zeroize() {
        let mut dto = LoginDto {
            username: "alice01".into(),
            password: "secret123".into(),
        };
        dto.zeroize();
        assert!(dto.password.is_empty());
    }
}
