//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SqliteCartStore                                                       │
//! │       │                                                                 │
//! │       │  db.storage().set_item("@RocketShoes:cart", json)              │
//! │       ▼                                                                 │
//! │  StorageRepository                                                     │
//! │  ├── get_item(&self, key)                                              │
//! │  └── set_item(&self, key, value)                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (local_storage table)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod storage;
