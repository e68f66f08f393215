//! # SQLite Cart Store
//!
//! `PersistentStore` backed by the `local_storage` table.
//!
//! The whole cart is one JSON document under one key. Every save rewrites
//! it; there is no per-item row.

use async_trait::async_trait;
use rocket_core::{Cart, PersistentStore, ServiceResult};
use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use crate::repository::storage::StorageRepository;

/// Persists the cart snapshot in SQLite under a fixed key.
#[derive(Debug, Clone)]
pub struct SqliteCartStore {
    storage: StorageRepository,
    key: String,
}

impl SqliteCartStore {
    /// Creates a store writing under `key` (normally [`rocket_core::CART_STORAGE_KEY`]).
    pub fn new(db: &Database, key: impl Into<String>) -> Self {
        SqliteCartStore {
            storage: db.storage(),
            key: key.into(),
        }
    }

    async fn read(&self) -> DbResult<Option<Cart>> {
        let Some(json) = self.storage.get_item(&self.key).await? else {
            debug!(key = %self.key, "No stored cart");
            return Ok(None);
        };

        let cart: Cart = serde_json::from_str(&json)?;
        debug!(key = %self.key, items = cart.item_count(), "Loaded stored cart");
        Ok(Some(cart))
    }

    async fn write(&self, cart: &Cart) -> DbResult<()> {
        let json = serde_json::to_string(cart)?;
        self.storage.set_item(&self.key, &json).await
    }
}

#[async_trait]
impl PersistentStore for SqliteCartStore {
    async fn load(&self) -> ServiceResult<Option<Cart>> {
        Ok(self.read().await?)
    }

    async fn save(&self, cart: &Cart) -> ServiceResult<()> {
        Ok(self.write(cart).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use rocket_core::{CartItem, Money, ProductId, ServiceError, CART_STORAGE_KEY};

    fn item(id: u32, amount: i64) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            title: format!("Tênis {}", id),
            price: Money::from_cents(17990),
            image: format!("https://cdn.example.com/{}.jpg", id),
            amount,
        }
    }

    async fn store() -> (Database, SqliteCartStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = SqliteCartStore::new(&db, CART_STORAGE_KEY);
        (db, store)
    }

    #[tokio::test]
    async fn test_load_before_first_save_is_absent() {
        let (_db, store) = store().await;
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (_db, store) = store().await;
        let cart = Cart::from_items(vec![item(1, 2), item(3, 1)]);

        store.save(&cart).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        let mut expected: Vec<_> = cart.items().to_vec();
        let mut actual: Vec<_> = loaded.items().to_vec();
        expected.sort_by_key(|i| i.id);
        actual.sort_by_key(|i| i.id);
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_save_rewrites_whole_snapshot() {
        let (_db, store) = store().await;

        store
            .save(&Cart::from_items(vec![item(1, 1), item(2, 1)]))
            .await
            .unwrap();
        store.save(&Cart::from_items(vec![item(2, 4)])).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.items(), &[item(2, 4)]);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_invalid_data() {
        let (db, store) = store().await;
        db.storage()
            .set_item(CART_STORAGE_KEY, "{not json")
            .await
            .unwrap();

        assert!(matches!(
            store.load().await,
            Err(ServiceError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_closed_pool_is_storage_error() {
        let (db, store) = store().await;
        db.close().await;

        assert!(matches!(
            store.save(&Cart::new()).await,
            Err(ServiceError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_reads_snapshot_written_by_web_storefront() {
        let (db, store) = store().await;
        db.storage()
            .set_item(
                CART_STORAGE_KEY,
                r#"[{"id":1,"title":"Tênis 1","price":17990,"image":"https://cdn.example.com/1.jpg","amount":3}]"#,
            )
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.items(), &[item(1, 3)]);
    }
}
