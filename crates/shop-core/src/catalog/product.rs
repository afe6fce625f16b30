//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
///
/// Products are built once when the catalog is loaded and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, non-negative.
    pub price: Money,
    /// Category name, one of the catalog's categories.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Technical specs in definition order.
    #[serde(default)]
    pub specs: ProductSpecs,
    /// Optional promotional badge (e.g., "Bestseller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Create a product with no specs and no badge.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
            specs: ProductSpecs::default(),
            badge: None,
        }
    }

    /// Set the badge.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Append a spec entry.
    pub fn with_spec(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(name, value);
        self
    }
}

/// A single spec line, e.g. `processor = "A17 Pro"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecEntry {
    /// Spec name.
    pub name: String,
    /// Display value.
    pub value: String,
}

/// Ordered mapping from spec name to display value.
///
/// The key set varies per product. Entries keep the order they were
/// defined in, which is the order they are rendered in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProductSpecs(Vec<SpecEntry>);

impl ProductSpecs {
    /// Create an empty spec list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a spec. An existing name keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(SpecEntry { name, value }),
        }
    }

    /// Look up a spec value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Iterate `(name, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|e| (e.name.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ProductSpecs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = ProductSpecs::new();
        for (name, value) in iter {
            specs.insert(name, value);
        }
        specs
    }
}
