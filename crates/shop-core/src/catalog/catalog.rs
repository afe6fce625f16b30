//! The read-only product catalog and category filtering.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::{CategoryFilter, Product, ProductSpecs, ALL_CATEGORIES};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Deserialize;

/// TechShop seed catalog, in the same format as external catalog files.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Return the products matching a category token, in catalog order.
///
/// `"All"` returns every product. Pure; an unknown token yields nothing.
pub fn filter_by_category<'a>(products: &'a [Product], token: &str) -> Vec<&'a Product> {
    filter_products(products, &CategoryFilter::from_token(token))
}

fn filter_products<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(&p.category)).collect()
}

/// A static, validated list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    currency: Currency,
    categories: Vec<String>,
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog, validating it.
    ///
    /// Product ids must be unique, prices non-negative and in the catalog
    /// currency, and every product category must be one of `categories`.
    pub fn new(
        currency: Currency,
        categories: Vec<String>,
        products: Vec<Product>,
    ) -> Result<Self, CommerceError> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            if category == ALL_CATEGORIES {
                return Err(CommerceError::InvalidCatalog(format!(
                    "category name \"{ALL_CATEGORIES}\" is reserved"
                )));
            }
            if !seen_categories.insert(category.as_str()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate category: {category}"
                )));
            }
        }

        let mut seen_ids = HashSet::new();
        for product in &products {
            if !seen_ids.insert(product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
            if product.price.currency != currency {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} is priced in {}, catalog uses {}",
                    product.id, product.price.currency, currency
                )));
            }
            if !seen_categories.contains(product.category.as_str()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has unknown category: {}",
                    product.id, product.category
                )));
            }
        }

        Ok(Self {
            currency,
            categories,
            products,
        })
    }

    /// The TechShop seed catalog.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(content)?;
        file.into_catalog()
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        file.into_catalog()
    }

    /// Load a catalog file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read catalog {}: {e}", path.display()))
        })?;
        let catalog = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Catalog currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Category names in definition order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Check if a category name is part of the catalog.
    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get a product by ID, failing if it is not in the catalog.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Products passing a filter, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        filter_products(&self.products, filter)
    }

    /// Products matching a category token, in catalog order.
    pub fn filter_by_category(&self, token: &str) -> Vec<&Product> {
        filter_by_category(&self.products, token)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    currency: Option<String>,
    categories: Vec<String>,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

/// A product as written in a catalog file, priced in minor units.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u64,
    name: String,
    price: i64,
    category: String,
    image: String,
    #[serde(default)]
    specs: ProductSpecs,
    #[serde(default)]
    badge: Option<String>,
}

impl CatalogFile {
    fn into_catalog(self) -> Result<ProductCatalog, CommerceError> {
        let currency = match self.currency.as_deref() {
            Some(code) => Currency::parse(code)?,
            None => Currency::default(),
        };
        let products = self
            .products
            .into_iter()
            .map(|r| Product {
                id: ProductId::new(r.id),
                name: r.name,
                price: Money::new(r.price, currency),
                category: r.category,
                image: r.image,
                specs: r.specs,
                badge: r.badge,
            })
            .collect();
        ProductCatalog::new(currency, self.categories, products)
    }
}
