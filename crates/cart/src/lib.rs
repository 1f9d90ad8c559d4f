//! Shopping cart module.
//!
//! The cart is a plain in-memory reducer: deterministic, synchronous and free
//! of IO. Nothing here can fail.

pub mod cart;

pub use cart::{Cart, CartEntry};
