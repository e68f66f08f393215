//! # rocket-cart: Cart Reconciliation for RocketShoes
//!
//! Owns the shopper's cart while the storefront is open.
//!
//! ## Module Organization
//! ```text
//! rocket_cart/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── manager.rs      ◄─── CartManager, CartServices
//! └── notifier.rs     ◄─── RecordingNotifier
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let services = CartServices {
//!     catalog: api.clone(),
//!     stock: api,
//!     store: Arc::new(SqliteCartStore::new(&db, CART_STORAGE_KEY)),
//!     notifier: Arc::new(RecordingNotifier::new()),
//! };
//!
//! let mut manager = CartManager::new(services).await;
//! manager.add_product(ProductId::new(1)).await;
//! println!("{} items", manager.totals().item_count);
//! ```

pub mod manager;
pub mod notifier;

pub use manager::{CartManager, CartServices};
pub use notifier::RecordingNotifier;
