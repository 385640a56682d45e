//! Redis SMS Verification Store

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::domain::gateways::VerificationStore;
use crate::shared::errors::RepositoryError;

use super::{sms_code_key, sms_flag_key};

pub struct RedisVerificationStore {
    conn: ConnectionManager,
}

impl RedisVerificationStore {
    #[must_use]
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl VerificationStore for RedisVerificationStore {
    async fn is_send_locked(&self, mobile: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.conn.clone();
        let locked: bool = conn.exists(sms_flag_key(mobile)).await?;
        Ok(locked)
    }

    async fn save_sms_code(
        &self,
        mobile: &str,
        code: &str,
        code_ttl: Duration,
        lock_ttl: Duration,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.conn.clone();
        let () = redis::pipe()
            .set_ex(sms_code_key(mobile), code, code_ttl.as_secs().max(1))
            .ignore()
            .set_ex(sms_flag_key(mobile), 1, lock_ttl.as_secs().max(1))
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn get_sms_code(&self, mobile: &str) -> Result<Option<String>, RepositoryError> {
        let mut conn = self.conn.clone();
        let code: Option<String> = conn.get(sms_code_key(mobile)).await?;
        Ok(code)
    }

    async fn delete_sms_code(&self, mobile: &str) -> Result<(), RepositoryError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(sms_code_key(mobile)).await?;
        Ok(())
    }
}
