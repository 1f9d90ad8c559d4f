//! Strongly-typed identifiers used across the storefront.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Backends disagree on whether product ids are numbers or strings, so any
/// JSON number (negative and fractional included) or string is accepted and
/// serialized back the way it arrived. `1` and `"1"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(Number),
    Text(String),
}

impl ProductId {
    pub fn numeric(id: u64) -> Self {
        Self::Number(Number::from(id))
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductId::Number(n) => core::fmt::Display::fmt(n, f),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::numeric(value)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self::from(n));
        }
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::from(n));
        }
        Ok(Self::Text(s.to_string()))
    }
}

/// Identifier of a storefront session (one per process/page lifetime).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("SessionId: {}", e)))?;
        Ok(Self(uuid))
    }
}
