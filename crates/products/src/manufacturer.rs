use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Maker of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Manufacturer {
    name: String,
    address: String,
}

impl ValueObject for Manufacturer {}

impl Manufacturer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns a copy with a new name (value objects are replaced, not mutated).
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: self.address.clone(),
        }
    }

    pub fn with_address(&self, address: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            address: address.into(),
        }
    }
}
