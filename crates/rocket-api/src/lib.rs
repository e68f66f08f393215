//! # rocket-api: Storefront REST Client
//!
//! Implements [`rocket_core::ProductCatalogClient`] and
//! [`rocket_core::StockOracle`] over HTTP.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /products/1                                                        │
//! │  { "id": 1, "title": "Tênis de Caminhada Leve Confortável",             │
//! │    "price": 179.9, "image": "https://…/shoe1.jpg" }                     │
//! │                                                                         │
//! │  GET /stock/1                                                           │
//! │  { "id": 1, "amount": 3 }                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use rocket_api::{ApiConfig, HttpStorefrontClient};
//!
//! let client = HttpStorefrontClient::new(&ApiConfig::from_url_str("http://localhost:3333")?)?;
//! let stock = client.get_stock(ProductId::new(1)).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpStorefrontClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
