use serde::{Deserialize, Serialize};

use storefront_core::{Entity, Money, OrderId};
use storefront_products::Product;

/// Entity: Order, a named bundle of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    products: Vec<Product>,
}

impl Order {
    /// Create an order with no products.
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self {
            id: id.into(),
            products: Vec::new(),
        }
    }

    pub fn with_products(id: impl Into<OrderId>, products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            id: id.into(),
            products: products.into_iter().collect(),
        }
    }

    pub fn id_typed(&self) -> &OrderId {
        &self.id
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sum of product prices. Each product counts once; there is no quantity.
    ///
    /// `None` if the sum does not fit in [`Money`].
    pub fn total_cost(&self) -> Option<Money> {
        Money::checked_sum(self.products.iter().map(Product::price))
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_products::{Dimensions, Manufacturer};

    fn product(name: &str, cents: i64) -> Product {
        Product::new(
            name,
            Dimensions::new(1, 1, 1),
            Money::from_cents(cents),
            Manufacturer::new("Gadgets Inc", "123 Gadget Lane"),
        )
        .unwrap()
    }

    #[test]
    fn empty_order_costs_nothing() {
        let order = Order::new("10");
        assert_eq!(order.total_cost(), Some(Money::zero()));
        assert!(order.products().is_empty());
    }

    #[test]
    fn total_cost_sums_product_prices() {
        let mut order = Order::new("10");
        order.add_product(product("Gadget", 330));
        order.add_product(product("Watch", 530));
        assert_eq!(order.total_cost(), Some(Money::from_cents(860)));
    }

    #[test]
    fn same_product_twice_counts_twice() {
        let gadget = product("Gadget", 330);
        let order = Order::with_products("11", [gadget.clone(), gadget]);
        assert_eq!(order.products().len(), 2);
        assert_eq!(order.total_cost(), Some(Money::from_cents(660)));
    }

    #[test]
    fn total_cost_is_none_when_prices_overflow() {
        let pricey = product("Yacht", i64::MAX / 2 + 1);
        let order = Order::with_products("12", [pricey.clone(), pricey]);
        assert_eq!(order.total_cost(), None);
    }

    #[test]
    fn identity_is_the_order_id() {
        let a = Order::new("10");
        let b = Order::with_products("10", [product("Lamp", 100)]);
        assert!(a.same_identity_as(&b));
        assert_eq!(a.id().as_str(), "10");
    }
}
