//! Filter engine: derives the visible subset of the catalog.

use serde::{Deserialize, Serialize};

use foodie_core::ValueObject;

use crate::product::Product;

/// Sentinel category that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

/// Active category + free-text query.
///
/// A non-empty query always wins over the category: searching resets the
/// category to [`ALL_CATEGORIES`], and [`filter`] ignores the category while a
/// query is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    active_category: String,
    query: String,
}

impl ValueObject for FilterCriteria {}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::all()
    }
}

impl FilterCriteria {
    /// "All" + empty query: the full catalog.
    pub fn all() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }

    /// Criteria produced by picking a category chip.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            active_category: category.into(),
            query: String::new(),
        }
    }

    /// Criteria produced by submitting a search. The category resets to "All".
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            query: query.into(),
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when the criteria select the whole catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.active_category == ALL_CATEGORIES
    }

    /// Whether a single product passes these criteria.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            return product.title().to_lowercase().contains(&needle)
                || product.description().to_lowercase().contains(&needle);
        }

        self.active_category == ALL_CATEGORIES || product.category() == self.active_category
    }
}

/// Apply `criteria` to `products`, preserving input order.
///
/// Never fails; an empty result is a valid, renderable state.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    if criteria.is_unfiltered() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
