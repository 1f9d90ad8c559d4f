//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// In the storefront these are things like filter criteria and the theme:
/// two criteria with the same category and query select the same products.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Criteria { category: String, query: String }
///
/// impl ValueObject for Criteria {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
