//! A single storefront session: catalog view, category tab, and cart.
//!
//! The storefront maps user gestures (add to cart, +/- buttons, remove,
//! category tabs) onto the cart and selection stores.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cart::{CartStore, CartSummary};
use crate::catalog::{CategorySelection, Product, ProductCatalog};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A storefront session behind an exclusive-access guard.
pub type SharedStorefront = Arc<Mutex<Storefront>>;

/// State for one shopper.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<ProductCatalog>,
    cart: CartStore,
    selection: CategorySelection,
}

impl Storefront {
    /// Start a session with an empty cart and the "All" tab selected.
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        let cart = CartStore::new(catalog.currency());
        let selection = CategorySelection::for_catalog(&catalog);
        Self {
            catalog,
            cart,
            selection,
        }
    }

    /// Wrap this session for use from several threads.
    pub fn into_shared(self) -> SharedStorefront {
        Arc::new(Mutex::new(self))
    }

    /// Lock a shared session.
    pub fn lock(shared: &SharedStorefront) -> Result<MutexGuard<'_, Storefront>, CommerceError> {
        shared.lock().map_err(|_| CommerceError::SessionPoisoned)
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), CommerceError> {
        let product = self.catalog.require(product_id)?;
        self.cart.add_item(product);
        Ok(())
    }

    /// The "+" button on a cart line.
    pub fn increment(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let current = self.cart.quantity_of(product_id);
        self.cart.set_quantity(product_id, i64::from(current) + 1)
    }

    /// The "-" button on a cart line. Decrementing from 1 removes the line.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let current = self.cart.quantity_of(product_id);
        if current == 0 {
            return Ok(false);
        }
        self.cart.set_quantity(product_id, i64::from(current) - 1)
    }

    /// Remove a line from the cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove_item(product_id)
    }

    /// Set a cart line quantity directly.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Select a category tab.
    pub fn select_category(&mut self, token: &str) -> Result<(), CommerceError> {
        self.selection.set_category(token)
    }

    /// Products shown under the current tab, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(self.selection.filter())
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    /// Current cart totals.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }
}
