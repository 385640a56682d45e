//! PostgreSQL Area Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::AreaRepository;
use crate::domain::models::area::Area;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct AreaRow {
    id: i64,
    name: String,
    parent_id: Option<i64>,
}

impl From<AreaRow> for Area {
    fn from(row: AreaRow) -> Self {
        Area {
            id: row.id,
            name: row.name,
            parent_id: row.parent_id,
        }
    }
}

pub struct PostgresAreaRepository {
    pool: PgPool,
}

impl PostgresAreaRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AreaRepository for PostgresAreaRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Area>, RepositoryError> {
        let row = sqlx::query_as::<_, AreaRow>("SELECT id, name, parent_id FROM areas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Area::from))
    }

    async fn list_provinces(&self) -> Result<Vec<Area>, RepositoryError> {
        let rows = sqlx::query_as::<_, AreaRow>("SELECT id, name, parent_id FROM areas WHERE parent_id IS NULL ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Area::from).collect())
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<Area>, RepositoryError> {
        let rows = sqlx::query_as::<_, AreaRow>("SELECT id, name, parent_id FROM areas WHERE parent_id = $1 ORDER BY id")
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Area::from).collect())
    }
}
