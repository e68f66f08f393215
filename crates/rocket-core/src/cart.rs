//! # Cart
//!
//! The shopper's working list of intended purchases.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Line State Machine                              │
//! │                                                                         │
//! │              insert(item, amount=1)                                     │
//! │   absent ─────────────────────────────► present(1)                     │
//! │     ▲                                       │                           │
//! │     │                                       │ set_amount(m), m ≥ 1      │
//! │     │ remove()                              ▼                           │
//! │     └───────────────────────────────── present(m)                      │
//! │                                                                         │
//! │  No other transitions. An amount below 1 is never stored.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure: stock checks and persistence belong to the
//! manager in `rocket-cart`.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_amount;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// Title, price and image are copied from the catalog when the product is
/// first added and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,

    /// Quantity in the cart, always ≥ 1.
    pub amount: i64,
}

impl CartItem {
    /// Creates a cart line from catalog data and an amount.
    pub fn from_product(product: &Product, amount: i64) -> Self {
        CartItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            amount,
        }
    }

    /// Line total (unit price × amount).
    pub fn line_total(&self) -> Money {
        self.price * self.amount
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Ordered collection of cart lines.
///
/// ## Invariants
/// - At most one item per `ProductId`
/// - Every `amount` is ≥ 1
/// - Order is insertion order; changing an amount keeps the line in place
///
/// Serialized as a bare JSON array of [`CartItem`], the format of the
/// persisted mirror. Deserializing goes through [`Cart::from_items`], so a
/// snapshot that breaks the invariants is repaired on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from a stored snapshot, enforcing the invariants.
    ///
    /// - Items with `amount < 1` are dropped
    /// - For duplicate ids the first occurrence wins
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();

        for item in items {
            if validate_amount(item.amount).is_err() {
                warn!(product_id = %item.id, amount = item.amount, "Dropping cart item with invalid amount");
                continue;
            }
            if cart.contains(item.id) {
                warn!(product_id = %item.id, "Dropping duplicate cart item");
                continue;
            }
            cart.items.push(item);
        }

        cart
    }

    /// Returns the cart lines in order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Checks whether a product has a line in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Appends a line, or replaces the existing line for the same product.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CartError::InvalidAmount)` if `item.amount < 1`
    pub fn insert(&mut self, item: CartItem) -> CartResult<()> {
        validate_amount(item.amount)?;

        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        Ok(())
    }

    /// Sets the absolute amount of an existing line.
    ///
    /// ## Returns
    /// - `Err(CartError::InvalidAmount)` if `amount < 1`
    /// - `Err(CartError::ItemNotFound)` if the product is not in the cart
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> CartResult<()> {
        validate_amount(amount)?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        item.amount = amount;
        Ok(())
    }

    /// Removes the line for a product and returns it.
    pub fn remove(&mut self, product_id: ProductId) -> CartResult<CartItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        Ok(self.items.remove(index))
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Calculates the subtotal (Σ price × amount).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summarizes the cart for display.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart summary for the front-end (header badge, checkout footer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
