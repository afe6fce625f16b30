//! Product catalog module.
//!
//! Contains the read-only catalog, product types, and category selection.

mod catalog;
mod category;
mod product;

pub use catalog::{filter_by_category, ProductCatalog};
pub use category::{CategoryFilter, CategorySelection, ALL_CATEGORIES};
pub use product::{Product, ProductSpecs, SpecEntry};
