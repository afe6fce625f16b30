//! Category filter tokens and the current category selection.

use crate::catalog::ProductCatalog;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Token meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// A category filter as selected on the storefront tabs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Unfiltered.
    #[default]
    All,
    /// Only products whose category equals the name.
    Category(String),
}

impl CategoryFilter {
    /// Interpret a raw token. `"All"` is the unfiltered sentinel; anything
    /// else is taken as a category name without checking it exists.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(token.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

/// The currently selected category tab.
///
/// Holds the fixed category set it validates against; starts on "All".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    categories: Vec<String>,
    current: CategoryFilter,
}

impl CategorySelection {
    /// Create a selection over a fixed category set.
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            current: CategoryFilter::All,
        }
    }

    /// Create a selection over the categories of a catalog.
    pub fn for_catalog(catalog: &ProductCatalog) -> Self {
        Self::new(catalog.categories().to_vec())
    }

    /// Select a category tab.
    ///
    /// Fails with [`CommerceError::UnknownCategory`] if the token is neither
    /// "All" nor one of the categories; the selection is left as it was.
    pub fn set_category(&mut self, token: &str) -> Result<(), CommerceError> {
        let filter = CategoryFilter::from_token(token);
        if let CategoryFilter::Category(name) = &filter {
            if !self.categories.iter().any(|c| c == name) {
                tracing::warn!(token, "rejected unknown category");
                return Err(CommerceError::UnknownCategory(token.to_string()));
            }
        }
        tracing::debug!(from = self.current.as_str(), to = token, "category selected");
        self.current = filter;
        Ok(())
    }

    /// The current selection token.
    pub fn current_category(&self) -> &str {
        self.current.as_str()
    }

    /// The current selection as a filter.
    pub fn filter(&self) -> &CategoryFilter {
        &self.current
    }

    /// Selectable tokens in tab order: "All" first, then each category.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL_CATEGORIES).chain(self.categories.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> CategorySelection {
        CategorySelection::new(vec!["Smartphones".to_string(), "Laptops".to_string()])
    }

    #[test]
    fn test_starts_unfiltered() {
        let sel = selection();
        assert_eq!(sel.current_category(), "All");
        assert_eq!(sel.filter(), &CategoryFilter::All);
    }

    #[test]
    fn test_set_known_category() {
        let mut sel = selection();
        sel.set_category("Laptops").unwrap();
        assert_eq!(sel.current_category(), "Laptops");

        sel.set_category("All").unwrap();
        assert_eq!(sel.current_category(), "All");
    }

    #[test]
    fn test_set_same_category_twice() {
        let mut sel = selection();
        sel.set_category("Smartphones").unwrap();
        sel.set_category("Smartphones").unwrap();
        assert_eq!(sel.current_category(), "Smartphones");
    }

    #[test]
    fn test_unknown_category_keeps_selection() {
        let mut sel = selection();
        sel.set_category("Laptops").unwrap();

        let err = sel.set_category("Toasters").unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("Toasters".to_string()));
        assert_eq!(sel.current_category(), "Laptops");
    }

    #[test]
    fn test_tokens_in_tab_order() {
        let sel = selection();
        let tokens: Vec<&str> = sel.tokens().collect();
        assert_eq!(tokens, vec!["All", "Smartphones", "Laptops"]);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches("anything"));
        let phones = CategoryFilter::from_token("Smartphones");
        assert!(phones.matches("Smartphones"));
        assert!(!phones.matches("Laptops"));
    }
}
