//! Shopping cart module.
//!
//! Contains the cart store, cart items, and derived summaries.

mod cart;
mod pricing;

pub use cart::{CartItem, CartStore};
pub use pricing::{CartSummary, LineSummary};
