//! # Collaborator Traits
//!
//! Contracts for everything the cart manager talks to.
//!
//! ## Seams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartManager Collaborators                        │
//! │                                                                         │
//! │  Trait                  Adapter (crate)              Test double        │
//! │  ─────                  ───────────────              ───────────        │
//! │  ProductCatalogClient   HttpStorefrontClient (api)   in-module fakes    │
//! │  StockOracle            HttpStorefrontClient (api)   in-module fakes    │
//! │  PersistentStore        SqliteCartStore (db)         MemoryCartStore    │
//! │  Notifier               ConsoleNotifier (cli)        RecordingNotifier  │
//! │                                                                         │
//! │  All lookups are read-only and may fail with ServiceError.             │
//! │  The notifier is fire-and-forget: nothing it does flows back.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CartError, CartOperation, ServiceResult};
use crate::types::{Product, ProductId, Stock};

// =============================================================================
// Lookups
// =============================================================================

/// Read-only access to product descriptions.
#[async_trait]
pub trait ProductCatalogClient: Send + Sync {
    /// Fetches title, price and image for a product.
    async fn get_product(&self, id: ProductId) -> ServiceResult<Product>;
}

/// Read-only access to current stock levels.
#[async_trait]
pub trait StockOracle: Send + Sync {
    /// Fetches how many units of a product are purchasable right now.
    async fn get_stock(&self, id: ProductId) -> ServiceResult<Stock>;
}

// =============================================================================
// Persistence
// =============================================================================

/// Whole-cart snapshot storage under a fixed namespace.
///
/// There is no incremental API: every successful mutation rewrites the full
/// snapshot.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    /// Reads the stored snapshot. `Ok(None)` means nothing was ever saved.
    async fn load(&self) -> ServiceResult<Option<Cart>>;

    /// Replaces the stored snapshot.
    async fn save(&self, cart: &Cart) -> ServiceResult<()>;
}

// =============================================================================
// Notifications
// =============================================================================

/// Machine-readable notice codes.
///
/// ## Usage in Front-end
/// ```typescript
/// switch (notice.code) {
///   case 'OUT_OF_STOCK':
///     toast.error(notice.message);
///     break;
///   default:
///     toast.error(notice.message);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    OutOfStock,
    ItemNotFound,
    InvalidAmount,
    AdditionFailed,
    RemovalFailed,
    UpdateFailed,
}

/// A user-facing warning.
///
/// This is what the front-end receives when a cart operation is aborted:
/// ```json
/// {
///   "code": "OUT_OF_STOCK",
///   "message": "Quantidade solicitada fora de estoque"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notice {
    pub code: ErrorCode,
    pub message: String,
}

impl Notice {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Notice {
            code,
            message: message.into(),
        }
    }
}

/// Shown whenever stock cannot cover the requested quantity.
pub const OUT_OF_STOCK_MESSAGE: &str = "Quantidade solicitada fora de estoque";

impl Notice {
    /// Builds the notice for a mutation that was aborted with `err`.
    ///
    /// The code identifies the error. The message is the storefront's toast
    /// text, which depends only on the operation unless stock ran out. The
    /// detailed `CartError` text (ids, amounts, root cause) goes to the log.
    ///
    /// ```text
    /// OutOfStock (any op)   → "Quantidade solicitada fora de estoque"
    /// anything else, add    → "Erro na adição do produto"
    /// anything else, remove → "Erro na remoção do produto"
    /// anything else, update → "Erro na alteração de quantidade do produto"
    /// ```
    pub fn for_failure(op: CartOperation, err: &CartError) -> Self {
        let code = match err {
            CartError::OutOfStock { .. } => ErrorCode::OutOfStock,
            CartError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            CartError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            CartError::AdditionFailed { .. } => ErrorCode::AdditionFailed,
            CartError::RemovalFailed { .. } => ErrorCode::RemovalFailed,
            CartError::UpdateFailed { .. } => ErrorCode::UpdateFailed,
        };

        let message = match (code, op) {
            (ErrorCode::OutOfStock, _) => OUT_OF_STOCK_MESSAGE,
            (_, CartOperation::Add) => "Erro na adição do produto",
            (_, CartOperation::Remove) => "Erro na remoção do produto",
            (_, CartOperation::Update) => "Erro na alteração de quantidade do produto",
        };

        Notice::new(code, message)
    }
}

/// Delivers notices to the shopper.
pub trait Notifier: Send + Sync {
    /// Shows a warning. Fire-and-forget.
    fn warn(&self, notice: &Notice);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn out_of_stock(id: ProductId) -> CartError {
        CartError::OutOfStock {
            product_id: id,
            available: 0,
            requested: 1,
        }
    }

    #[test]
    fn test_notice_codes() {
        let id = ProductId::new(1);
        let cases = [
            (CartOperation::Add, out_of_stock(id), ErrorCode::OutOfStock),
            (CartOperation::Remove, CartError::ItemNotFound(id), ErrorCode::ItemNotFound),
            (CartOperation::Update, CartError::InvalidAmount(0), ErrorCode::InvalidAmount),
            (
                CartOperation::Add,
                CartOperation::Add.failed(id, ServiceError::Unavailable("down".into())),
                ErrorCode::AdditionFailed,
            ),
            (
                CartOperation::Remove,
                CartOperation::Remove.failed(id, ServiceError::Storage("disk full".into())),
                ErrorCode::RemovalFailed,
            ),
            (
                CartOperation::Update,
                CartOperation::Update.failed(id, ServiceError::Unavailable("down".into())),
                ErrorCode::UpdateFailed,
            ),
        ];

        for (op, err, code) in cases {
            assert_eq!(Notice::for_failure(op, &err).code, code);
        }
    }

    #[test]
    fn test_out_of_stock_message_for_every_operation() {
        let err = out_of_stock(ProductId::new(2));
        for op in [CartOperation::Add, CartOperation::Update] {
            assert_eq!(
                Notice::for_failure(op, &err).message,
                "Quantidade solicitada fora de estoque"
            );
        }
    }

    #[test]
    fn test_notice_messages_follow_operation() {
        let id = ProductId::new(3);

        let notice = Notice::for_failure(CartOperation::Remove, &CartError::ItemNotFound(id));
        assert_eq!(notice.code, ErrorCode::ItemNotFound);
        assert_eq!(notice.message, "Erro na remoção do produto");

        let notice = Notice::for_failure(CartOperation::Update, &CartError::ItemNotFound(id));
        assert_eq!(notice.message, "Erro na alteração de quantidade do produto");

        let notice = Notice::for_failure(CartOperation::Update, &CartError::InvalidAmount(-1));
        assert_eq!(notice.code, ErrorCode::InvalidAmount);
        assert_eq!(notice.message, "Erro na alteração de quantidade do produto");
    }

    #[test]
    fn test_notice_hides_root_cause() {
        let err = CartOperation::Add.failed(
            ProductId::new(4),
            ServiceError::Unavailable("tcp connect error: 127.0.0.1:3333".into()),
        );
        let notice = Notice::for_failure(CartOperation::Add, &err);
        assert_eq!(notice.message, "Erro na adição do produto");
    }

    #[test]
    fn test_notice_serialization() {
        let notice = Notice::new(ErrorCode::OutOfStock, OUT_OF_STOCK_MESSAGE);
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["code"], "OUT_OF_STOCK");
        assert_eq!(json["message"], "Quantidade solicitada fora de estoque");
    }
}
