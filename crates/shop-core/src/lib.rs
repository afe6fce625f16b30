//! Catalog and cart state for the TechShop storefront.
//!
//! - **Catalog**: a static product list filtered by category tab
//! - **Cart**: an in-memory cart with add/remove/set-quantity and derived totals
//! - **Storefront**: one shopper's session tying the two together
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shop_core::prelude::*;
//!
//! let catalog = Arc::new(ProductCatalog::builtin()?);
//! let mut shop = Storefront::new(catalog);
//!
//! shop.select_category("Smartphones")?;
//! let first = shop.visible_products()[0].id;
//! shop.add_to_cart(first)?;
//! shop.add_to_cart(first)?;
//!
//! assert_eq!(shop.cart().total_items(), 2);
//! println!("Total: {}", shop.cart().total_price());
//! # Ok::<(), CommerceError>(())
//! ```
//!
//! The main types are also exported at the crate root:
//!
//! ```rust
//! use shop_core::{CartStore, ProductCatalog};
//!
//! let catalog = ProductCatalog::builtin()?;
//! let mut cart = CartStore::new(catalog.currency());
//! cart.add_item(&catalog.products()[0]);
//! assert_eq!(cart.total_items(), 1);
//! # Ok::<(), shop_core::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod storefront;

pub use cart::CartStore;
pub use catalog::ProductCatalog;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        filter_by_category, CategoryFilter, CategorySelection, Product, ProductCatalog,
        ProductSpecs, ALL_CATEGORIES,
    };

    // Cart
    pub use crate::cart::{CartItem, CartStore, CartSummary, LineSummary};

    // Session
    pub use crate::storefront::{SharedStorefront, Storefront};
}
