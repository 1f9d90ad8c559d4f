//! Catalog module: products, the catalog store and the filter engine.
//!
//! Everything here is deterministic and free of IO; fetching the catalog is the
//! client crate's job.

pub mod filter;
pub mod product;
pub mod store;

pub use filter::{ALL_CATEGORIES, FilterCriteria, filter};
pub use product::Product;
pub use store::CatalogStore;
