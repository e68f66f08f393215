//! # Cart Manager
//!
//! Holds the current cart and applies the three shopper mutations to it.
//!
//! ## Mutation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Every Mutation                                   │
//! │                                                                         │
//! │  1. Validate input      (amount ≥ 1, item present)                      │
//! │  2. Query stock         (StockOracle, never cached)                     │
//! │  3. Build next cart     (a copy, current cart untouched)                │
//! │  4. Save next cart      (PersistentStore, whole snapshot)               │
//! │  5. Commit              (next cart becomes current)                     │
//! │                                                                         │
//! │  Failure at 1-4 → CartError → warn! + Notice → Notifier                 │
//! │                   in-memory cart and persisted mirror both unchanged    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item State Machine
//! ```text
//!            add               add / update            remove
//!   absent ───────► present(1) ─────────────► present(n) ───────► absent
//! ```
//!
//! Public mutations return `()`. The caller learns about a rejected mutation
//! only through the notifier and the unchanged [`CartManager::cart`].

use std::sync::Arc;

use rocket_core::validation::{validate_amount, validate_stock};
use rocket_core::{
    Cart, CartError, CartItem, CartOperation, CartResult, CartTotals, Notice, Notifier,
    PersistentStore, ProductCatalogClient, ProductId, ServiceError, Stock, StockOracle,
    MIN_ITEM_AMOUNT,
};
use tracing::{debug, info, warn};

// =============================================================================
// Services
// =============================================================================

/// The collaborators a [`CartManager`] is built from.
///
/// One adapter may fill several slots; the HTTP client is both the catalog
/// and the stock oracle.
#[derive(Clone)]
pub struct CartServices {
    pub catalog: Arc<dyn ProductCatalogClient>,
    pub stock: Arc<dyn StockOracle>,
    pub store: Arc<dyn PersistentStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for CartServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartServices").finish_non_exhaustive()
    }
}

// =============================================================================
// Cart Manager
// =============================================================================

/// Cart state plus the rules for changing it.
#[derive(Debug)]
pub struct CartManager {
    cart: Cart,
    services: CartServices,
}

impl CartManager {
    /// Creates a manager, restoring the cart from the persistent store.
    ///
    /// A missing snapshot gives an empty cart. So does a snapshot that cannot
    /// be read or decoded; that case is logged and otherwise ignored.
    pub async fn new(services: CartServices) -> Self {
        let cart = match services.store.load().await {
            Ok(Some(cart)) => {
                info!(items = cart.item_count(), "Restored persisted cart");
                cart
            }
            Ok(None) => {
                debug!("No persisted cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load persisted cart, starting empty");
                Cart::new()
            }
        };

        CartManager { cart, services }
    }

    /// Returns the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the totals of the current cart.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Stock below one: rejected with `OUT_OF_STOCK`
    /// - Product already in cart: amount becomes current + 1, re-validated
    ///   against stock
    /// - Product not in cart: catalog data is fetched and a line with
    ///   amount 1 is appended
    pub async fn add_product(&mut self, product_id: ProductId) {
        debug!(%product_id, "add_product");
        let result = self.try_add(product_id).await;
        self.report(CartOperation::Add, product_id, result);
    }

    /// Removes a product's line from the cart.
    pub async fn remove_product(&mut self, product_id: ProductId) {
        debug!(%product_id, "remove_product");
        let result = self.try_remove(product_id).await;
        self.report(CartOperation::Remove, product_id, result);
    }

    /// Sets the absolute amount of a product already in the cart.
    ///
    /// The line keeps its position in the cart.
    pub async fn update_product_amount(&mut self, product_id: ProductId, amount: i64) {
        debug!(%product_id, amount, "update_product_amount");
        let result = self
            .try_update(product_id, amount, CartOperation::Update)
            .await;
        self.report(CartOperation::Update, product_id, result);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    async fn try_add(&mut self, product_id: ProductId) -> CartResult<()> {
        let op = CartOperation::Add;

        let stock = self.fetch_stock(product_id, op).await?;
        validate_stock(&stock, MIN_ITEM_AMOUNT)?;

        if let Some(current) = self.cart.get(product_id).map(|item| item.amount) {
            let next_amount = current.checked_add(1).ok_or(CartError::OutOfStock {
                product_id,
                available: stock.amount,
                requested: current,
            })?;
            return self.try_update(product_id, next_amount, op).await;
        }

        let product = self
            .services
            .catalog
            .get_product(product_id)
            .await
            .map_err(|e| op.failed(product_id, e))?;

        if product.id != product_id {
            return Err(op.failed(
                product_id,
                ServiceError::InvalidData(format!(
                    "catalog returned product {} for {}",
                    product.id, product_id
                )),
            ));
        }

        let mut next = self.cart.clone();
        next.insert(CartItem::from_product(&product, MIN_ITEM_AMOUNT))?;
        self.commit(next, product_id, op).await
    }

    async fn try_remove(&mut self, product_id: ProductId) -> CartResult<()> {
        let mut next = self.cart.clone();
        next.remove(product_id)?;
        self.commit(next, product_id, CartOperation::Remove).await
    }

    /// `op` is the operation the shopper started; add-on-existing arrives
    /// here with `CartOperation::Add`.
    async fn try_update(
        &mut self,
        product_id: ProductId,
        amount: i64,
        op: CartOperation,
    ) -> CartResult<()> {
        validate_amount(amount)?;
        if !self.cart.contains(product_id) {
            return Err(CartError::ItemNotFound(product_id));
        }

        let stock = self.fetch_stock(product_id, op).await?;
        validate_stock(&stock, amount)?;

        let mut next = self.cart.clone();
        next.set_amount(product_id, amount)?;
        self.commit(next, product_id, op).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn fetch_stock(&self, product_id: ProductId, op: CartOperation) -> CartResult<Stock> {
        let stock = self
            .services
            .stock
            .get_stock(product_id)
            .await
            .map_err(|e| op.failed(product_id, e))?;

        if stock.id != product_id {
            return Err(op.failed(
                product_id,
                ServiceError::InvalidData(format!(
                    "stock service returned product {} for {}",
                    stock.id, product_id
                )),
            ));
        }
        Ok(stock)
    }

    /// Saves `next` and, only if that succeeded, makes it the current cart.
    async fn commit(
        &mut self,
        next: Cart,
        product_id: ProductId,
        op: CartOperation,
    ) -> CartResult<()> {
        self.services
            .store
            .save(&next)
            .await
            .map_err(|e| op.failed(product_id, e))?;
        self.cart = next;
        Ok(())
    }

    fn report(&self, op: CartOperation, product_id: ProductId, result: CartResult<()>) {
        match result {
            Ok(()) => {
                let amount = self.cart.get(product_id).map(|item| item.amount);
                info!(%op, %product_id, ?amount, items = self.cart.item_count(), "Cart updated");
            }
            Err(err) => {
                warn!(%op, %product_id, error = %err, "Cart operation aborted");
                self.services.notifier.warn(&Notice::for_failure(op, &err));
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
