//! Storefront error types.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Currency;

/// Errors that can occur in storefront operations.
///
/// Every variant leaves the store it was raised from unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity is negative or does not fit a cart line.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Category token is neither a catalog category nor "All".
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Product is not part of the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Catalog definition failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Unsupported currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Product price is not in the cart's currency.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A shared session guard was poisoned by a panicking holder.
    #[error("Storefront session lock poisoned")]
    SessionPoisoned,
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
