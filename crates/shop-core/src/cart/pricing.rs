//! Cart summary snapshots.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Derived totals for a cart at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub total_items: u64,
    /// Number of distinct products.
    pub unique_items: usize,
    /// Sum of line totals.
    pub total_price: Money,
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
}

impl CartSummary {
    /// Check if the cart was empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Badge count shown on the cart button, hidden when zero.
    pub fn badge_count(&self) -> Option<u64> {
        (self.total_items > 0).then_some(self.total_items)
    }
}

/// Totals for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity
    pub line_total: Money,
}
