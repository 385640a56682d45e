//! Redis Cart Store
//!
//! `cart_<uid>` hash maps sku id to count, `cart_selected_<uid>` holds the
//! selected sku ids.

use async_trait::async_trait;
use redis::aio::ConnectionManager;

use crate::domain::gateways::CartStore;
use crate::domain::models::cart::CartItem;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

use super::{cart_key, cart_selected_key};

pub struct RedisCartStore {
    conn: ConnectionManager,
}

impl RedisCartStore {
    #[must_use]
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CartStore for RedisCartStore {
    async fn merge(&self, user_id: UserId, items: &[CartItem]) -> Result<(), RepositoryError> {
        if items.is_empty() {
            return Ok(());
        }
        let cart = cart_key(user_id);
        let selected = cart_selected_key(user_id);

        let mut pipe = redis::pipe();
        for item in items {
            pipe.hset(&cart, item.sku_id, item.count).ignore();
            if item.selected {
                pipe.sadd(&selected, item.sku_id).ignore();
            } else {
                pipe.srem(&selected, item.sku_id).ignore();
            }
        }

        let mut conn = self.conn.clone();
        let () = pipe.query_async(&mut conn).await?;
        Ok(())
    }
}
