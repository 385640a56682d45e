//! PostgreSQL SKU Repository Implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::SkuRepository;
use crate::domain::models::sku::Sku;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct SkuRow {
    id: i64,
    name: String,
    price: Decimal,
    default_image_url: String,
    comments: i32,
    is_launched: bool,
}

impl From<SkuRow> for Sku {
    fn from(row: SkuRow) -> Self {
        Sku {
            id: row.id,
            name: row.name,
            price: row.price,
            default_image_url: row.default_image_url,
            comments: row.comments,
            is_launched: row.is_launched,
        }
    }
}

pub struct PostgresSkuRepository {
    pool: PgPool,
}

impl PostgresSkuRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkuRepository for PostgresSkuRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Sku>, RepositoryError> {
        let row = sqlx::query_as::<_, SkuRow>(
            "SELECT id, name, price, default_image_url, comments, is_launched FROM skus WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Sku::from))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Sku>, RepositoryError> {
        let rows = sqlx::query_as::<_, SkuRow>(
            "SELECT id, name, price, default_image_url, comments, is_launched FROM skus WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Sku::from).collect())
    }
}
