//! `foodie-core` — storefront building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, cart and
//! client crates (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SessionId};
pub use value_object::ValueObject;
