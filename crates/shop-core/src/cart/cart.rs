//! Cart store and cart item types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, copied from the catalog when first added.
    pub product: Product,
    /// Quantity, always at least 1 while the item is in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// Product ID, the cart identity key.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity, or None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(u64::from(self.quantity))
    }
}

/// The shopping cart for one storefront session.
///
/// Items keep first-added order and there is at most one item per product.
/// Totals are recomputed from the items on every read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartItem>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart accepting products priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing item is incremented in place; otherwise the product is
    /// appended with quantity 1. A product priced in another currency is
    /// ignored and the cart is left unchanged.
    pub fn add_item(&mut self, product: &Product) {
        if product.price.currency != self.currency {
            tracing::warn!(
                product_id = %product.id,
                currency = %product.price.currency,
                cart_currency = %self.currency,
                "rejected product priced in another currency"
            );
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(
                product_id = %product.id,
                quantity = existing.quantity,
                "cart item incremented"
            );
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        tracing::debug!(product_id = %product.id, "cart item added");
    }

    /// Remove a product from the cart.
    ///
    /// Returns whether an item was removed; an absent product is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "cart item removed");
        }
        removed
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// Zero removes the item. An absent product is a no-op. Negative
    /// quantities are rejected with [`CommerceError::InvalidQuantity`] and
    /// leave the cart unchanged. Returns whether the cart changed.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity < 0 {
            tracing::warn!(%product_id, quantity, "rejected negative quantity");
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            return Ok(self.remove_item(product_id));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            tracing::warn!(%product_id, quantity, "rejected oversized quantity");
            CommerceError::InvalidQuantity(quantity)
        })?;

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                tracing::debug!(%product_id, quantity, "cart quantity set");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Sum of quantities over all items.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over all items.
    ///
    /// Saturates at the largest representable amount; use
    /// [`try_total_price`](Self::try_total_price) to detect overflow.
    pub fn total_price(&self) -> Money {
        self.try_total_price()
            .unwrap_or_else(|_| Money::new(i64::MAX, self.currency))
    }

    /// Sum of price times quantity, failing on overflow or on a line priced
    /// in another currency.
    pub fn try_total_price(&self) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(self.currency), |acc, item| {
            if item.product.price.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency,
                    got: item.product.price.currency,
                });
            }
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            acc.try_add(&line).ok_or(CommerceError::Overflow)
        })
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the item for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Quantity of a product, zero when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Snapshot of the cart with per-line totals.
    pub fn summary(&self) -> CartSummary {
        let lines = self
            .items
            .iter()
            .map(|item| LineSummary {
                product_id: item.product.id,
                name: item.product.name.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                line_total: item
                    .line_total()
                    .unwrap_or_else(|| Money::new(i64::MAX, self.currency)),
            })
            .collect();

        CartSummary {
            total_items: self.total_items(),
            unique_items: self.items.len(),
            total_price: self.total_price(),
            lines,
        }
    }
}
