//! `foodie-client`
//!
//! **Responsibility:** the storefront session a presentation layer drives.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - The catalog source seam and its HTTP implementation
//! - The theme preference store
//! - [`Storefront`], the owned session state (catalog, criteria, cart, drawer)
//!
//! Rendering is out of scope; views read from a `Storefront` and call its
//! operations in response to user input.

pub mod config;
pub mod preferences;
pub mod session;
pub mod source;

pub use config::ClientConfig;
pub use preferences::{
    FilePreferenceStore, InMemoryPreferenceStore, PreferenceError, PreferenceStore, Theme,
};
pub use session::{LoadOutcome, Storefront};
pub use source::{CatalogError, CatalogSource, FetchedCatalog, HttpCatalogSource, fetch_catalog};
