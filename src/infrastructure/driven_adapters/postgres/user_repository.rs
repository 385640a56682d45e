//! PostgreSQL User Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::UserRepository;
use crate::domain::models::address::AddressId;
use crate::domain::models::user::{NewUser, User, UserId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    mobile: String,
    email: Option<String>,
    email_active: bool,
    default_address_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::restore(
            UserId::new(row.id),
            row.username,
            row.password_hash,
            row.mobile,
            row.email,
            row.email_active,
            row.default_address_id.map(AddressId::new),
            row.created_at,
            row.updated_at,
        )
    }
}

const USER_COLUMNS: &str =
    "id, username, password_hash, mobile, email, email_active, default_address_id, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn count(&self, column: &str, value: &str) -> Result<i64, RepositoryError> {
        let sql = format!("SELECT COUNT(*) FROM users WHERE {column} = $1");
        let count: i64 = sqlx::query_scalar(&sql).bind(value).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.find_one("username", username).await
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, RepositoryError> {
        self.find_one("mobile", mobile).await
    }

    async fn count_by_username(&self, username: &str) -> Result<i64, RepositoryError> {
        self.count("username", username).await
    }

    async fn count_by_mobile(&self, mobile: &str) -> Result<i64, RepositoryError> {
        self.count("mobile", mobile).await
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO users (username, password_hash, mobile, email_active, created_at, updated_at)
            VALUES ($1, $2, $3, false, NOW(), NOW())
            RETURNING {USER_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.mobile)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::unique_violation(e, format!("user {}", user.username)))?;
        Ok(row.into())
    }

    async fn update_email(&self, user: &User) -> Result<Option<User>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE users
            SET email = $2,
                email_active = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.id().value())
            .bind(user.email())
            .bind(user.email_active())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn set_default_address(&self, id: UserId, address_id: Option<AddressId>) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE users SET default_address_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(id.value())
            .bind(address_id.map(|a| a.value()))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
