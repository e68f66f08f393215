//! # Validation Module
//!
//! Amount and stock rules every cart mutation goes through.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Update Amount Checks                               │
//! │                                                                         │
//! │  1. validate_amount      amount ≥ 1             → InvalidAmount        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. item lookup          product in cart        → ItemNotFound         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. validate_stock       amount ≤ available     → OutOfStock           │
//! │                                                                         │
//! │  Checks 1 and 3 live here. Check 2 needs the cart (see cart.rs).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rocket_core::validation::{validate_amount, validate_stock};
//! use rocket_core::{ProductId, Stock};
//!
//! validate_amount(3).unwrap();
//! assert!(validate_amount(0).is_err());
//!
//! let stock = Stock { id: ProductId::new(1), amount: 2 };
//! assert!(validate_stock(&stock, 3).is_err());
//! ```

use crate::error::{CartError, CartResult};
use crate::types::Stock;
use crate::MIN_ITEM_AMOUNT;

/// Validates a requested absolute quantity.
pub fn validate_amount(amount: i64) -> CartResult<()> {
    if amount < MIN_ITEM_AMOUNT {
        return Err(CartError::InvalidAmount(amount));
    }
    Ok(())
}

/// Validates that `stock` can supply `requested` units.
///
/// A stock of zero fails for every request, including the first unit of a
/// new cart line.
pub fn validate_stock(stock: &Stock, requested: i64) -> CartResult<()> {
    if !stock.covers(requested) {
        return Err(CartError::OutOfStock {
            product_id: stock.id,
            available: stock.amount,
            requested,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(1).is_ok());
        assert!(validate_amount(999).is_ok());
        assert_eq!(validate_amount(0), Err(CartError::InvalidAmount(0)));
        assert_eq!(validate_amount(-3), Err(CartError::InvalidAmount(-3)));
    }

    #[test]
    fn test_validate_stock() {
        let stock = Stock {
            id: ProductId::new(2),
            amount: 5,
        };
        assert!(validate_stock(&stock, 5).is_ok());
        assert_eq!(
            validate_stock(&stock, 6),
            Err(CartError::OutOfStock {
                product_id: ProductId::new(2),
                available: 5,
                requested: 6,
            })
        );
    }

    #[test]
    fn test_zero_stock_rejects_first_unit() {
        let stock = Stock {
            id: ProductId::new(2),
            amount: 0,
        };
        assert!(matches!(
            validate_stock(&stock, 1),
            Err(CartError::OutOfStock { available: 0, .. })
        ));
    }
}
