//! # In-Memory Cart Store
//!
//! `PersistentStore` that keeps the serialized snapshot in memory.
//!
//! The snapshot is held as JSON text rather than as a `Cart`, so a save and
//! a load go through the same encoding as the SQLite store.

use async_trait::async_trait;
use rocket_core::{Cart, PersistentStore, ServiceResult};
use tokio::sync::Mutex;

use crate::error::DbError;

/// Ephemeral cart store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    snapshot: Mutex<Option<String>>,
}

impl MemoryCartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryCartStore::default()
    }

    /// Creates a store that already holds `json`, as if a previous session
    /// had saved it.
    pub fn with_snapshot(json: impl Into<String>) -> Self {
        MemoryCartStore {
            snapshot: Mutex::new(Some(json.into())),
        }
    }

    /// Returns the raw stored JSON.
    pub async fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().await.clone()
    }
}

#[async_trait]
impl PersistentStore for MemoryCartStore {
    async fn load(&self) -> ServiceResult<Option<Cart>> {
        let guard = self.snapshot.lock().await;
        match guard.as_deref() {
            None => Ok(None),
            Some(json) => {
                let cart = serde_json::from_str(json).map_err(DbError::from)?;
                Ok(Some(cart))
            }
        }
    }

    async fn save(&self, cart: &Cart) -> ServiceResult<()> {
        let json = serde_json::to_string(cart).map_err(DbError::from)?;
        *self.snapshot.lock().await = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket_core::{CartItem, Money, ProductId, ServiceError};

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryCartStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        let cart = Cart::from_items(vec![CartItem {
            id: ProductId::new(5),
            title: "Tênis VR Caminhada".to_string(),
            price: Money::from_cents(13990),
            image: "https://cdn.example.com/5.jpg".to_string(),
            amount: 2,
        }]);
        store.save(&cart).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(cart));
        assert!(store.snapshot().await.unwrap().contains("\"amount\":2"));
    }

    #[tokio::test]
    async fn test_corrupt_snapshot() {
        let store = MemoryCartStore::with_snapshot("nope");
        assert!(matches!(
            store.load().await,
            Err(ServiceError::InvalidData(_))
        ));
    }
}
