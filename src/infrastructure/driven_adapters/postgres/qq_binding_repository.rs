//! PostgreSQL QQ Binding Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::QqBindingRepository;
use crate::domain::models::oauth::QqBinding;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct QqBindingRow {
    id: i64,
    user_id: i64,
    openid: String,
    created_at: DateTime<Utc>,
}

impl From<QqBindingRow> for QqBinding {
    fn from(row: QqBindingRow) -> Self {
        QqBinding {
            id: row.id,
            user_id: UserId::new(row.user_id),
            openid: row.openid,
            created_at: row.created_at,
        }
    }
}

pub struct PostgresQqBindingRepository {
    pool: PgPool,
}

impl PostgresQqBindingRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QqBindingRepository for PostgresQqBindingRepository {
    async fn find_by_openid(&self, openid: &str) -> Result<Option<QqBinding>, RepositoryError> {
        let row = sqlx::query_as::<_, QqBindingRow>(
            "SELECT id, user_id, openid, created_at FROM oauth_qq_users WHERE openid = $1",
        )
        .bind(openid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(QqBinding::from))
    }

    async fn create(&self, user_id: UserId, openid: &str) -> Result<QqBinding, RepositoryError> {
        let row = sqlx::query_as::<_, QqBindingRow>(
            r#"
            INSERT INTO oauth_qq_users (user_id, openid, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, user_id, openid, created_at
            "#,
        )
        .bind(user_id.value())
        .bind(openid)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::unique_violation(e, format!("openid {openid}")))?;
        Ok(row.into())
    }
}
