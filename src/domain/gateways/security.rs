//! Token and password gateways

use crate::domain::models::user::{User, UserId};
use crate::shared::errors::ServiceError;

/// Issues and checks the signed tokens handed to clients
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Login token used as `Authorization: Bearer`
    fn issue_access_token(&self, user: &User) -> Result<String, ServiceError>;

    /// Short-lived token carrying a QQ openid to the bind form
    fn sign_openid(&self, openid: &str) -> Result<String, ServiceError>;

    fn verify_openid(&self, token: &str) -> Option<String>;

    /// Token embedded in the e-mail verification link
    fn sign_email_verification(&self, user_id: UserId, email: &str) -> Result<String, ServiceError>;

    fn verify_email_token(&self, token: &str) -> Option<(UserId, String)>;
}

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, ServiceError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, ServiceError>;
}
