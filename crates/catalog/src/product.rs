use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use foodie_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog product, exactly as the backend describes it.
///
/// Products are immutable once loaded; the catalog store owns them and the
/// cart copies the fields it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    category: String,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "non_negative_price"
    )]
    price: Decimal,
    #[serde(default)]
    in_stock: bool,
}

impl Product {
    /// Build a product, rejecting negative prices.
    ///
    /// Applies the same rules as wire decoding: a blank title is accepted there
    /// too, since one odd product must not sink the whole catalog.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        in_stock: bool,
    ) -> DomainResult<Self> {
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price must be non-negative"));
        }

        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            price,
            in_stock,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Display-only availability flag. Sold-out products can still be added
    /// to the cart.
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let price = rust_decimal::serde::float::deserialize(deserializer)?;
    if price < Decimal::ZERO {
        return Err(D::Error::custom(format!("price must be non-negative, got {price}")));
    }
    Ok(price)
}
