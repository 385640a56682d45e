//! PostgreSQL Address Repository Implementation
//!
//! Area names are resolved with joins so the domain entity is complete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::AddressRepository;
use crate::domain::models::address::{Address, AddressData, AddressId};
use crate::domain::models::area::AreaRef;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    id: i64,
    user_id: i64,
    title: String,
    receiver: String,
    province_id: i64,
    province_name: String,
    city_id: i64,
    city_name: String,
    district_id: i64,
    district_name: String,
    place: String,
    mobile: String,
    tel: Option<String>,
    email: Option<String>,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address::restore(
            AddressId::new(row.id),
            UserId::new(row.user_id),
            row.title,
            row.receiver,
            AreaRef {
                id: row.province_id,
                name: row.province_name,
            },
            AreaRef {
                id: row.city_id,
                name: row.city_name,
            },
            AreaRef {
                id: row.district_id,
                name: row.district_name,
            },
            row.place,
            row.mobile,
            row.tel,
            row.email,
            row.is_deleted,
            row.created_at,
            row.updated_at,
        )
    }
}

/// Select list over a relation named `a` joined with its three areas
const SELECT_JOINED: &str = r#"
    SELECT a.id, a.user_id, a.title, a.receiver,
           a.province_id, p.name AS province_name,
           a.city_id, c.name AS city_name,
           a.district_id, d.name AS district_name,
           a.place, a.mobile, a.tel, a.email, a.is_deleted, a.created_at, a.updated_at
"#;

const JOIN_AREAS: &str = r#"
    JOIN areas p ON p.id = a.province_id
    JOIN areas c ON c.id = a.city_id
    JOIN areas d ON d.id = a.district_id
"#;

pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        let sql = format!("{SELECT_JOINED} FROM addresses a {JOIN_AREAS} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Address::from))
    }

    async fn list_active(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let sql = format!(
            "{SELECT_JOINED} FROM addresses a {JOIN_AREAS} \
             WHERE a.user_id = $1 AND a.is_deleted = false ORDER BY a.updated_at DESC"
        );
        let rows = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Address::from).collect())
    }

    async fn count_active(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses WHERE user_id = $1 AND is_deleted = false")
            .bind(user_id.value())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, user_id: UserId, data: &AddressData) -> Result<Address, RepositoryError> {
        let sql = format!(
            r#"
            WITH a AS (
                INSERT INTO addresses (
                    user_id, title, receiver, province_id, city_id, district_id,
                    place, mobile, tel, email, is_deleted, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, false, NOW(), NOW())
                RETURNING *
            )
            {SELECT_JOINED} FROM a {JOIN_AREAS}
            "#
        );
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(user_id.value())
            .bind(data.effective_title())
            .bind(&data.receiver)
            .bind(data.province_id)
            .bind(data.city_id)
            .bind(data.district_id)
            .bind(&data.place)
            .bind(&data.mobile)
            .bind(&data.tel)
            .bind(&data.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: AddressId, data: &AddressData) -> Result<Option<Address>, RepositoryError> {
        let sql = format!(
            r#"
            WITH a AS (
                UPDATE addresses
                SET title = $2,
                    receiver = $3,
                    province_id = $4,
                    city_id = $5,
                    district_id = $6,
                    place = $7,
                    mobile = $8,
                    tel = $9,
                    email = $10,
                    updated_at = NOW()
                WHERE id = $1 AND is_deleted = false
                RETURNING *
            )
            {SELECT_JOINED} FROM a {JOIN_AREAS}
            "#
        );
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(id.value())
            .bind(data.effective_title())
            .bind(&data.receiver)
            .bind(data.province_id)
            .bind(data.city_id)
            .bind(data.district_id)
            .bind(&data.place)
            .bind(&data.mobile)
            .bind(&data.tel)
            .bind(&data.email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Address::from))
    }

    async fn update_title(&self, id: AddressId, title: &str) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("UPDATE addresses SET title = $2, updated_at = NOW() WHERE id = $1 AND is_deleted = false")
                .bind(id.value())
                .bind(title)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: AddressId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET is_deleted = true, updated_at = NOW()
            WHERE id = $1 AND is_deleted = false
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
