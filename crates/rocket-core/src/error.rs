//! # Error Types
//!
//! Domain-specific error types for the cart.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocket-core errors (this file)                                        │
//! │  ├── CartError     - Why a cart mutation was aborted                   │
//! │  └── ServiceError  - A collaborator (catalog, stock, store) failed     │
//! │                                                                         │
//! │  adapter errors (separate crates)                                      │
//! │  ├── DbError       - rocket-db, converted into ServiceError            │
//! │  └── ApiError      - rocket-api, converted into ServiceError           │
//! │                                                                         │
//! │  Flow: DbError/ApiError → ServiceError → CartError → Notice → UI       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Lookup failures keep their source so logs show the root cause
//! 4. Each `CartError` variant maps to exactly one user-facing notice

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Service Error
// =============================================================================

/// A failure reported by one of the cart's collaborators.
///
/// Adapter crates translate their own error enums into this one at the trait
/// boundary, so the manager never sees `sqlx` or `reqwest` types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The requested resource does not exist upstream.
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// The remote service could not be reached or answered with an error.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Local persistent storage failed.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// A payload could not be decoded.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ServiceError {
    /// Creates a NotFound error for a given resource type and ID.
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        ServiceError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for collaborator results.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Cart Operation
// =============================================================================

/// The public mutation an error occurred in.
///
/// Lookup and persistence failures are reported with the catch-all variant of
/// the operation the user started, even when `add` delegates to the amount
/// update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

impl CartOperation {
    /// Wraps a collaborator failure in this operation's catch-all error.
    pub fn failed(self, product_id: ProductId, source: ServiceError) -> CartError {
        match self {
            CartOperation::Add => CartError::AdditionFailed { product_id, source },
            CartOperation::Remove => CartError::RemovalFailed { product_id, source },
            CartOperation::Update => CartError::UpdateFailed { product_id, source },
        }
    }
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Remove => write!(f, "remove"),
            CartOperation::Update => write!(f, "update"),
        }
    }
}

// =============================================================================
// Cart Error
// =============================================================================

/// Why a cart mutation was aborted.
///
/// A mutation that fails with any of these leaves both the in-memory cart and
/// the persisted mirror exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Requested quantity exceeds what stock can supply.
    ///
    /// ## User Workflow
    /// ```text
    /// Change Quantity (qty: 10)
    ///      │
    ///      ▼
    /// Stock lookup: available=5
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 1, available: 5, requested: 10 }
    ///      │
    ///      ▼
    /// UI shows: "Quantidade solicitada fora de estoque"
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// The mutation targets a product that is not in the cart.
    #[error("Product {0} is not in the cart")]
    ItemNotFound(ProductId),

    /// A quantity below one was requested.
    #[error("Invalid amount {0}: must be at least 1")]
    InvalidAmount(i64),

    /// Adding failed because a lookup or the store failed.
    #[error("Failed to add product {product_id}: {source}")]
    AdditionFailed {
        product_id: ProductId,
        #[source]
        source: ServiceError,
    },

    /// Removing failed because the store failed.
    #[error("Failed to remove product {product_id}: {source}")]
    RemovalFailed {
        product_id: ProductId,
        #[source]
        source: ServiceError,
    },

    /// Changing the quantity failed because a lookup or the store failed.
    #[error("Failed to update product {product_id}: {source}")]
    UpdateFailed {
        product_id: ProductId,
        #[source]
        source: ServiceError,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::OutOfStock {
            product_id: ProductId::new(3),
            available: 5,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 3: available 5, requested 10"
        );

        let err = CartError::InvalidAmount(0);
        assert_eq!(err.to_string(), "Invalid amount 0: must be at least 1");
    }

    #[test]
    fn test_operation_selects_catch_all_variant() {
        let id = ProductId::new(7);
        let source = ServiceError::Unavailable("connection refused".to_string());

        assert!(matches!(
            CartOperation::Add.failed(id, source.clone()),
            CartError::AdditionFailed { .. }
        ));
        assert!(matches!(
            CartOperation::Remove.failed(id, source.clone()),
            CartError::RemovalFailed { .. }
        ));
        assert!(matches!(
            CartOperation::Update.failed(id, source),
            CartError::UpdateFailed { .. }
        ));
    }

    #[test]
    fn test_lookup_failure_keeps_source() {
        use std::error::Error as _;

        let err = CartOperation::Add.failed(ProductId::new(1), ServiceError::not_found("Product", 1));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Product not found: 1"));
    }
}
