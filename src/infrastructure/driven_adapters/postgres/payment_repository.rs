//! PostgreSQL Payment Repository Implementation
//!
//! Recording a payment and advancing the order happen in one transaction;
//! the order update is conditional on the unpaid status.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::PaymentRepository;
use crate::domain::models::payment::{Order, OrderStatus, Payment};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_id: String,
    user_id: i64,
    total_amount: Decimal,
    status: i16,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_code(row.status)
            .ok_or_else(|| RepositoryError::Mapping(format!("Unknown order status: {}", row.status)))?;

        Ok(Order {
            order_id: row.order_id,
            user_id: UserId::new(row.user_id),
            total_amount: row.total_amount,
            status,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i64,
    order_id: String,
    trade_no: String,
    create_time: DateTime<Utc>,
    update_time: DateTime<Utc>,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Payment {
            id: row.id,
            order_id: row.order_id,
            trade_no: row.trade_no,
            create_time: row.create_time,
            update_time: row.update_time,
        }
    }
}

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn find_order(&self, order_id: &str) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT order_id, user_id, total_amount, status FROM order_info WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    async fn find_by_order(&self, order_id: &str) -> Result<Option<Payment>, RepositoryError> {
        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT id, order_id, trade_no, create_time, update_time
            FROM payments
            WHERE order_id = $1
            ORDER BY create_time DESC
            LIMIT 1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Payment::from))
    }

    async fn record(&self, order_id: &str, trade_no: &str) -> Result<Option<Payment>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE order_info SET status = $2, updated_at = NOW() WHERE order_id = $1 AND status = $3",
        )
        .bind(order_id)
        .bind(OrderStatus::Unsent.code())
        .bind(OrderStatus::Unpaid.code())
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
            INSERT INTO payments (order_id, trade_no, create_time, update_time)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, order_id, trade_no, create_time, update_time
            "#,
        )
        .bind(order_id)
        .bind(trade_no)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row.into()))
    }
}
