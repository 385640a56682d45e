//! Register User Use Case
//!
//! Creates an account after checking the SMS code and uniqueness of
//! username and mobile, then logs the new user in.

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, TokenService, UserRepository, VerificationStore};
use crate::domain::models::user::NewUser;
use crate::shared::errors::UseCaseError;

use super::login_user::LoginResult;
use super::sms::check_sms_code;

/// Registration form after format validation
#[derive(Debug, Clone)]
pub struct RegisterUserData {
    pub username: String,
    pub password: String,
    pub password2: String,
    pub mobile: String,
    pub sms_code: String,
    pub allow: bool,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    verification_store: Arc<dyn VerificationStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl RegisterUserUseCase {
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        verification_store: Arc<dyn VerificationStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            verification_store,
            password_hasher,
            token_service,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the passwords differ, the agreement
    /// was not accepted or the SMS code is wrong or expired.
    /// Returns `UseCaseError::Conflict` if the username or mobile is taken.
    pub async fn execute(&self, data: RegisterUserData) -> Result<LoginResult, UseCaseError> {
        tracing::info!(username = %data.username, mobile = %data.mobile, "Registering user");

        if !data.allow {
            return Err(UseCaseError::invalid("allow: the user agreement must be accepted"));
        }
        if data.password != data.password2 {
            return Err(UseCaseError::invalid("password2: passwords do not match"));
        }

        check_sms_code(self.verification_store.as_ref(), &data.mobile, &data.sms_code).await?;

        if self.user_repository.count_by_username(&data.username).await? > 0 {
            tracing::warn!(username = %data.username, "Username already registered");
            return Err(UseCaseError::Conflict(format!(
                "Username {} is already registered",
                data.username
            )));
        }
        if self.user_repository.count_by_mobile(&data.mobile).await? > 0 {
            tracing::warn!(mobile = %data.mobile, "Mobile already registered");
            return Err(UseCaseError::Conflict(format!(
                "Mobile {} is already registered",
                data.mobile
            )));
        }

        let password_hash = self.password_hasher.hash(&data.password)?;
        let user = self
            .user_repository
            .create(&NewUser {
                username: data.username,
                password_hash,
                mobile: data.mobile,
            })
            .await?;
        let token = self.token_service.issue_access_token(&user)?;

        tracing::info!(user_id = %user.id(), "User registered successfully");
        Ok(LoginResult { user, token })
    }
}
