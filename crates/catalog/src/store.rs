//! Catalog store: the products and categories loaded from the backend.

use chrono::{DateTime, Utc};

use foodie_core::ProductId;

use crate::filter::ALL_CATEGORIES;
use crate::product::Product;

/// Full, unfiltered catalog.
///
/// Empty until the first successful load; after that it only changes through
/// [`CatalogStore::replace`], which swaps the whole catalog at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// An empty catalog whose only category is the "All" sentinel.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            loaded_at: None,
        }
    }

    /// Replace the catalog with a freshly fetched one.
    ///
    /// Categories are stored prefixed with the synthetic "All" entry, in the
    /// order the backend returned them.
    pub fn replace(
        &mut self,
        products: Vec<Product>,
        categories: Vec<String>,
        loaded_at: DateTime<Utc>,
    ) {
        let mut all = Vec::with_capacity(categories.len() + 1);
        all.push(ALL_CATEGORIES.to_string());
        all.extend(categories);

        self.products = products;
        self.categories = all;
        self.loaded_at = Some(loaded_at);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category chips, "All" first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }
}
