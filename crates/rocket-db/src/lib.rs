//! # rocket-db: Persistent Storage for the RocketShoes Cart
//!
//! This crate provides the persisted mirror of the cart: a small SQLite
//! key-value table standing in for browser local storage, plus an in-memory
//! store with the same contract.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Persistence Flow                            │
//! │                                                                         │
//! │  CartManager (rocket-cart)                                             │
//! │       │  store.save(&next_cart)                                         │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rocket-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (storage.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ StorageRepo   │    │ 001_local_   │  │   │
//! │  │   │               │    │ get/set       │    │  storage.sql │  │   │
//! │  │   └───────────────┘    └───────▲───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │   SqliteCartStore ─────────────┘   (JSON snapshot per key)     │   │
//! │  │   MemoryCartStore                  (no disk)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rocket_db::{Database, DbConfig, SqliteCartStore};
//!
//! let db = Database::new(DbConfig::new("cart.db")).await?;
//! let store = SqliteCartStore::new(&db, rocket_core::CART_STORAGE_KEY);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use memory::MemoryCartStore;
pub use pool::{Database, DbConfig};
pub use repository::storage::StorageRepository;
pub use store::SqliteCartStore;
