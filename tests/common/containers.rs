//! Container-backed stores for adapter e2e tests
//!
//! Spins up PostgreSQL (with migrations applied) and Redis so the SQL and
//! pipeline code in the driven adapters runs against real servers.

use redis::aio::ConnectionManager;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// A migrated PostgreSQL database
pub struct TestDatabase {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&format!("postgres://postgres:postgres@{host}:{port}/postgres"))
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _container: container,
        }
    }

    /// Insert a user row directly and return its id
    pub async fn insert_user(&self, username: &str, mobile: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO users (username, password_hash, mobile) VALUES ($1, 'x', $2) RETURNING id")
            .bind(username)
            .bind(mobile)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to insert user")
    }

    pub async fn insert_area(&self, id: i64, name: &str, parent_id: Option<i64>) {
        sqlx::query("INSERT INTO areas (id, name, parent_id) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(parent_id)
            .execute(&self.pool)
            .await
            .expect("Failed to insert area");
    }

    /// Insert an unpaid order
    pub async fn insert_order(&self, order_id: &str, user_id: i64) {
        sqlx::query("INSERT INTO order_info (order_id, user_id, total_amount, status) VALUES ($1, $2, 6999.00, 1)")
            .bind(order_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .expect("Failed to insert order");
    }
}

/// A Redis server with a shared connection manager
pub struct TestRedis {
    pub conn: ConnectionManager,
    _container: ContainerAsync<Redis>,
}

impl TestRedis {
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get port");

        let client = redis::Client::open(format!("redis://{host}:{port}")).expect("Invalid Redis URL");
        let conn = ConnectionManager::new(client)
            .await
            .expect("Failed to connect to Redis");

        Self {
            conn,
            _container: container,
        }
    }
}
