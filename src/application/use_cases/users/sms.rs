//! SMS code check shared by registration and QQ binding

use crate::domain::gateways::VerificationStore;
use crate::shared::errors::UseCaseError;

/// Compare `submitted` against the stored code for `mobile`.
///
/// A stored code is consumed by the first attempt, right or wrong.
pub(crate) async fn check_sms_code(
    store: &dyn VerificationStore,
    mobile: &str,
    submitted: &str,
) -> Result<(), UseCaseError> {
    let Some(expected) = store.get_sms_code(mobile).await? else {
        tracing::warn!(mobile = %mobile, "SMS code missing or expired");
        return Err(UseCaseError::invalid("sms_code: SMS code expired"));
    };
    store.delete_sms_code(mobile).await?;

    if expected != submitted {
        tracing::warn!(mobile = %mobile, "SMS code mismatch");
        return Err(UseCaseError::invalid("sms_code: SMS code is wrong"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::verification_store::MockVerificationStore;

    #[tokio::test]
    async fn should_consume_code_even_when_wrong() {
        let mut store = MockVerificationStore::new();
        store
            .expect_get_sms_code()
            .returning(|_| Ok(Some("123456".to_string())));
        store.expect_delete_sms_code().times(1).returning(|_| Ok(()));

        let result = check_sms_code(&store, "13800138000", "654321").await;
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn should_reject_expired_code_without_delete() {
        let mut store = MockVerificationStore::new();
        store.expect_get_sms_code().returning(|_| Ok(None));
        store.expect_delete_sms_code().never();

        let result = check_sms_code(&store, "13800138000", "123456").await;
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn should_accept_matching_code() {
        let mut store = MockVerificationStore::new();
        store
            .expect_get_sms_code()
            .returning(|_| Ok(Some("123456".to_string())));
        store.expect_delete_sms_code().times(1).returning(|_| Ok(()));

        assert!(check_sms_code(&store, "13800138000", "123456").await.is_ok());
    }
}
