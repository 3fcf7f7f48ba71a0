use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ValueObject};

use crate::manufacturer::Manufacturer;

/// Physical size of a product, in whole units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    pub fn new(length: u32, width: u32, height: u32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Computed in `u64`.
    pub fn volume(&self) -> u64 {
        u64::from(self.length) * u64::from(self.width) * u64::from(self.height)
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    dimensions: Dimensions,
    price: Money,
    manufacturer: Manufacturer,
}

impl ValueObject for Product {}

impl Product {
    /// Build a product.
    ///
    /// Fails if `name` is blank or `price` is negative.
    pub fn new(
        name: impl Into<String>,
        dimensions: Dimensions,
        price: Money,
        manufacturer: Manufacturer,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if price.is_negative() {
            return Err(DomainError::validation("product price cannot be negative"));
        }
        Ok(Self {
            name,
            dimensions,
            price,
            manufacturer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn length(&self) -> u32 {
        self.dimensions.length
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn volume(&self) -> u64 {
        self.dimensions.volume()
    }

    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gadgets_inc() -> Manufacturer {
        Manufacturer::new("Gadgets Inc", "123 Gadget Lane")
    }

    #[test]
    fn product_exposes_dimension_accessors() {
        let product = Product::new(
            "Gadget",
            Dimensions::new(10, 5, 3),
            Money::from_cents(330),
            gadgets_inc(),
        )
        .unwrap();

        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.price(), Money::from_cents(330));
        assert_eq!(product.length(), 10);
        assert_eq!(product.width(), 5);
        assert_eq!(product.height(), 3);
        assert_eq!(product.volume(), 150);
        assert_eq!(product.manufacturer().name(), "Gadgets Inc");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Product::new("  ", Dimensions::new(1, 1, 1), Money::zero(), gadgets_inc())
            .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name cannot be empty") => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Product::new(
            "Lamp",
            Dimensions::new(1, 1, 1),
            Money::from_cents(-1),
            gadgets_inc(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn free_products_are_allowed() {
        assert!(Product::new("Sticker", Dimensions::new(1, 1, 1), Money::zero(), gadgets_inc()).is_ok());
    }

    #[test]
    fn manufacturer_updates_return_new_values() {
        let original = gadgets_inc();
        let moved = original.with_address("1 New Road");
        assert_eq!(original.address(), "123 Gadget Lane");
        assert_eq!(moved.address(), "1 New Road");
        assert_eq!(moved.name(), original.name());
        assert_eq!(original.with_name("Widgets Co").name(), "Widgets Co");
    }

    #[test]
    fn product_serializes_price_in_cents() {
        let product = Product::new(
            "Watch",
            Dimensions::new(1, 3, 2),
            Money::from_cents(530),
            Manufacturer::new("Watches Inc", "123 Watches Lane"),
        )
        .unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], 530);
        assert_eq!(json["dimensions"]["height"], 2);
    }

    proptest! {
        /// Property: volume is the product of the three sides.
        #[test]
        fn volume_is_product_of_sides(l in 0u32..100_000, w in 0u32..100_000, h in 0u32..100_000) {
            let dims = Dimensions::new(l, w, h);
            prop_assert_eq!(
                u128::from(dims.volume()),
                u128::from(l) * u128::from(w) * u128::from(h)
            );
        }
    }
}
