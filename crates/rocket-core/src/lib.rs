//! # rocket-core: Pure Cart Domain for RocketShoes
//!
//! This crate is the **heart** of the storefront cart. It holds the domain
//! types, the error taxonomy, the amount/stock rules and the traits every
//! external collaborator implements. Nothing in here touches a disk or a
//! socket.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RocketShoes Cart Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (CLI / UI)                         │   │
//! │  │         show ──► add ──► update ──► remove                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rocket-cart (CartManager)                       │   │
//! │  └───────┬──────────────────────┬──────────────────────┬───────────┘   │
//! │          │                      │                      │               │
//! │  ┌───────▼──────────────────────▼──────────────────────▼───────────┐   │
//! │  │               ★ rocket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ services  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  traits   │  │   │
//! │  │   │   Stock   │  │           │  │ CartItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          ▲                      ▲                                       │
//! │  ┌───────┴───────┐      ┌───────┴───────┐                              │
//! │  │  rocket-db    │      │  rocket-api   │                              │
//! │  │ PersistentStore│     │ Catalog/Stock │                              │
//! │  └───────────────┘      └───────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (ProductId, Product, Stock)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart, CartItem and totals
//! - [`error`] - Cart error taxonomy and collaborator errors
//! - [`validation`] - Amount and stock rules
//! - [`services`] - Collaborator traits and the user-facing [`Notice`]
//!
//! ## Example Usage
//!
//! ```rust
//! use rocket_core::{Cart, CartItem, Money, Product, ProductId};
//!
//! let product = Product {
//!     id: ProductId::new(1),
//!     title: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: Money::from_cents(17990),
//!     image: "https://example.com/shoe.jpg".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.insert(CartItem::from_product(&product, 1)).unwrap();
//! cart.set_amount(product.id, 3).unwrap();
//!
//! assert_eq!(cart.totals().subtotal.cents(), 53970);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod services;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CartError, CartOperation, CartResult, ServiceError, ServiceResult};
pub use money::Money;
pub use services::{ErrorCode, Notice, Notifier, PersistentStore, ProductCatalogClient, StockOracle};
pub use types::{Product, ProductId, Stock};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage namespace the cart snapshot is written under.
///
/// Kept identical to the key the storefront front-end has always used, so an
/// existing persisted cart is picked up after an upgrade.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Smallest quantity a cart line may hold.
pub const MIN_ITEM_AMOUNT: i64 = 1;
