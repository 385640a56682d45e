//! User Use Cases
//!
//! Registration, login, profile and e-mail verification.

mod count_mobile;
mod count_username;
mod get_user_profile;
mod login_user;
mod register_user;
mod send_sms_code;
pub(crate) mod sms;
mod update_email;
mod verify_email;

pub use count_mobile::CountMobileUseCase;
pub use count_username::CountUsernameUseCase;
pub use get_user_profile::GetUserProfileUseCase;
pub use login_user::{LoginResult, LoginUseCase};
pub use register_user::{RegisterUserData, RegisterUserUseCase};
pub use send_sms_code::{SendSmsCodeUseCase, SMS_CODE_EXPIRES, SMS_SEND_INTERVAL};
pub use update_email::UpdateEmailUseCase;
pub use verify_email::VerifyEmailUseCase;
