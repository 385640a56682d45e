//! PostgreSQL Content Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::ContentRepository;
use crate::domain::models::content::{Content, ContentCategory, GoodsCategory, GoodsChannel};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct ChannelRow {
    group_id: i32,
    category_id: i64,
    category_name: String,
    url: String,
    sequence: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct GoodsCategoryRow {
    id: i64,
    name: String,
    parent_id: Option<i64>,
}

#[derive(Debug, sqlx::FromRow)]
struct ContentCategoryRow {
    id: i64,
    name: String,
    key: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: i64,
    category_id: i64,
    title: String,
    url: String,
    image: String,
    text: String,
    sequence: i32,
    status: bool,
}

pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn list_channels(&self) -> Result<Vec<GoodsChannel>, RepositoryError> {
        let rows = sqlx::query_as::<_, ChannelRow>(
            r#"
            SELECT ch.group_id, ch.category_id, gc.name AS category_name, ch.url, ch.sequence
            FROM goods_channels ch
            JOIN goods_categories gc ON gc.id = ch.category_id
            ORDER BY ch.group_id, ch.sequence
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| GoodsChannel {
                group_id: r.group_id,
                category_id: r.category_id,
                category_name: r.category_name,
                url: r.url,
                sequence: r.sequence,
            })
            .collect())
    }

    async fn list_goods_categories(&self) -> Result<Vec<GoodsCategory>, RepositoryError> {
        let rows = sqlx::query_as::<_, GoodsCategoryRow>("SELECT id, name, parent_id FROM goods_categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| GoodsCategory {
                id: r.id,
                name: r.name,
                parent_id: r.parent_id,
            })
            .collect())
    }

    async fn list_content_categories(&self) -> Result<Vec<ContentCategory>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContentCategoryRow>("SELECT id, name, key FROM content_categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| ContentCategory {
                id: r.id,
                name: r.name,
                key: r.key,
            })
            .collect())
    }

    async fn list_active_contents(&self) -> Result<Vec<Content>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContentRow>(
            r#"
            SELECT id, category_id, title, url, image, text, sequence, status
            FROM contents
            WHERE status = true
            ORDER BY sequence
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Content {
                id: r.id,
                category_id: r.category_id,
                title: r.title,
                url: r.url,
                image: r.image,
                text: r.text,
                sequence: r.sequence,
                status: r.status,
            })
            .collect())
    }
}
