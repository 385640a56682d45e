//! Bind QQ User Use Case
//!
//! Attaches a QQ openid to an existing account (matched by mobile and
//! password) or to a newly created one, and logs that account in.

use std::sync::Arc;

use crate::application::use_cases::users::sms::check_sms_code;
use crate::application::use_cases::users::LoginResult;
use crate::domain::gateways::{
    PasswordHasher, QqBindingRepository, TokenService, UserRepository, VerificationStore,
};
use crate::domain::models::user::NewUser;
use crate::shared::errors::UseCaseError;

/// Bind form after format validation
#[derive(Debug, Clone)]
pub struct BindQqData {
    pub mobile: String,
    pub password: String,
    pub sms_code: String,
    pub access_token: String,
}

pub struct BindQqUserUseCase {
    binding_repository: Arc<dyn QqBindingRepository>,
    user_repository: Arc<dyn UserRepository>,
    verification_store: Arc<dyn VerificationStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl BindQqUserUseCase {
    #[must_use]
    pub fn new(
        binding_repository: Arc<dyn QqBindingRepository>,
        user_repository: Arc<dyn UserRepository>,
        verification_store: Arc<dyn VerificationStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            binding_repository,
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
    /// Returns `UseCaseError::Validation` for an invalid bind token, a wrong
    /// SMS code, or a wrong password for an existing account.
    /// Returns `UseCaseError::Conflict` if the openid is already bound.
    pub async fn execute(&self, data: BindQqData) -> Result<LoginResult, UseCaseError> {
        let openid = self
            .token_service
            .verify_openid(&data.access_token)
            .ok_or_else(|| UseCaseError::invalid("access_token: invalid or expired bind token"))?;

        check_sms_code(self.verification_store.as_ref(), &data.mobile, &data.sms_code).await?;

        if self.binding_repository.find_by_openid(&openid).await?.is_some() {
            tracing::warn!(openid = %openid, "QQ openid already bound");
            return Err(UseCaseError::Conflict("This QQ account is already bound".to_string()));
        }

        let user = match self.user_repository.find_by_mobile(&data.mobile).await? {
            Some(existing) => {
                if !self.password_hasher.verify(&data.password, existing.password_hash())? {
                    tracing::warn!(user_id = %existing.id(), "QQ bind with wrong password");
                    return Err(UseCaseError::invalid("password: wrong password"));
                }
                existing
            }
            None => {
                let password_hash = self.password_hasher.hash(&data.password)?;
                let created = self
                    .user_repository
                    .create(&NewUser {
                        username: data.mobile.clone(),
                        password_hash,
                        mobile: data.mobile.clone(),
                    })
                    .await?;
                tracing::info!(user_id = %created.id(), "Created user during QQ bind");
                created
            }
        };

        self.binding_repository.create(user.id(), &openid).await?;
        let token = self.token_service.issue_access_token(&user)?;

        tracing::info!(user_id = %user.id(), "QQ account bound");
        Ok(LoginResult { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::qq_binding_repository::MockQqBindingRepository;
    use crate::domain::gateways::security::MockTokenService;
    use crate::shared::errors::RepositoryError;
    use crate::infrastructure::driven_adapters::in_memory::{InMemoryDatabase, InMemoryKeyValue};
    use crate::infrastructure::driven_adapters::password::BcryptPasswordHasher;
    use std::time::Duration;

    fn tokens() -> MockTokenService {
        let mut tokens = MockTokenService::new();
        tokens.expect_verify_openid().returning(|token| {
            (token == "bind-token").then(|| "OPENID123".to_string())
        });
        tokens.expect_issue_access_token().returning(|_| Ok("jwt".to_string()));
        tokens
    }

    fn data(password: &str) -> BindQqData {
        BindQqData {
            mobile: "13800138000".to_string(),
            password: password.to_string(),
            sms_code: "123456".to_string(),
            access_token: "bind-token".to_string(),
        }
    }

    async fn setup() -> (Arc<InMemoryDatabase>, BcryptPasswordHasher, BindQqUserUseCase) {
        let db = Arc::new(InMemoryDatabase::new());
        let kv = Arc::new(InMemoryKeyValue::new());
        kv.save_sms_code("13800138000", "123456", Duration::from_secs(300), Duration::from_secs(60))
            .await
            .unwrap();
        let use_case = BindQqUserUseCase::new(
            db.clone(),
            db.clone(),
            kv,
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(tokens()),
        );
        (db, BcryptPasswordHasher::new(4), use_case)
    }

    #[tokio::test]
    async fn should_create_user_when_mobile_unknown() {
        let (db, _, use_case) = setup().await;

        let result = use_case.execute(data("password123")).await.unwrap();

        assert_eq!(result.user.username(), "13800138000");
        assert!(db.binding_for("OPENID123").is_some());
    }

    #[tokio::test]
    async fn should_bind_existing_user_with_correct_password() {
        let (db, hasher, use_case) = setup().await;
        let existing = db.seed_user("alice01", &hasher.hash("password123").unwrap(), "13800138000");

        let result = use_case.execute(data("password123")).await.unwrap();

        assert_eq!(result.user.id(), existing.id());
        assert_eq!(db.binding_for("OPENID123"), Some(existing.id()));
    }

    #[tokio::test]
    async fn should_reject_wrong_password_for_existing_user() {
        let (db, hasher, use_case) = setup().await;
        db.seed_user("alice01", &hasher.hash("password123").unwrap(), "13800138000");

        let result = use_case.execute(data("not-the-password")).await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
        assert!(db.binding_for("OPENID123").is_none());
    }

    #[tokio::test]
    async fn should_reject_invalid_bind_token() {
        let (_, _, use_case) = setup().await;
        let mut input = data("password123");
        input.access_token = "forged".to_string();

        assert!(matches!(use_case.execute(input).await, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn should_return_conflict_when_openid_bound_concurrently() {
        let db = Arc::new(InMemoryDatabase::new());
        let kv = Arc::new(InMemoryKeyValue::new());
        kv.save_sms_code("13800138000", "123456", Duration::from_secs(300), Duration::from_secs(60))
            .await
            .unwrap();

        let mut bindings = MockQqBindingRepository::new();
        bindings.expect_find_by_openid().returning(|_| Ok(None));
        bindings
            .expect_create()
            .returning(|_, openid| Err(RepositoryError::Duplicate(format!("openid {openid}"))));

        let use_case = BindQqUserUseCase::new(
            Arc::new(bindings),
            db,
            kv,
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(tokens()),
        );

        let err = use_case.execute(data("password123")).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }
}
