//! `storefront-demo` - end-to-end walkthrough of inventory and sales.
//!
//! Builds a small catalog, stocks the inventory, submits one order and
//! renders both reports.

use anyhow::{Context, Result};
use serde_json::{Value as JsonValue, json};

use storefront_core::{Money, OrderId};
use storefront_inventory::{InventoryAction, InventoryStore};
use storefront_parties::Customer;
use storefront_products::{Dimensions, Manufacturer, Product};
use storefront_sales::{Order, OrderLedger};

/// Starting income for the demo customer, in cents.
pub const INCOME_ENV: &str = "STOREFRONT_DEMO_INCOME";
/// When set to `1`/`true`, print machine-readable JSON instead of reports.
pub const JSON_ENV: &str = "STOREFRONT_DEMO_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub income: Money,
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            income: Money::from_cents(10_000),
            json: false,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let income = match lookup(INCOME_ENV) {
            Some(raw) => {
                let cents: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{INCOME_ENV} must be an integer amount of cents, got {raw:?}"))?;
                Money::from_cents(cents)
            }
            None => defaults.income,
        };
        let json = match lookup(JSON_ENV) {
            Some(raw) => matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            None => defaults.json,
        };
        Ok(Self { income, json })
    }
}

/// Everything the walkthrough produced.
#[derive(Debug)]
pub struct DemoOutcome {
    pub inventory: InventoryStore,
    pub ledger: OrderLedger,
    pub customer: Customer,
    pub order_accepted: bool,
}

impl DemoOutcome {
    pub fn inventory_report(&self) -> String {
        self.inventory.report()
    }

    pub fn sales_report(&self) -> String {
        self.ledger.report()
    }

    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(json!({
            "inventory": self.inventory.snapshot(),
            "orders": serde_json::to_value(self.ledger.entries())
                .context("failed to serialize ledger entries")?,
            "customer": serde_json::to_value(&self.customer)
                .context("failed to serialize customer")?,
            "total_revenue": self.ledger.total_revenue(),
        }))
    }
}

fn catalog() -> Result<(Product, Product)> {
    let gadgets = Manufacturer::new("Gadgets Inc", "123 Gadget Lane");
    let watches = Manufacturer::new("Watches Inc", "123 Watches Lane");

    let gadget = Product::new("Gadget", Dimensions::new(10, 5, 3), Money::from_major_minor(3, 30)?, gadgets)?;
    let watch = Product::new("Watch", Dimensions::new(1, 3, 2), Money::from_major_minor(5, 30)?, watches)?;
    Ok((gadget, watch))
}

/// Run the walkthrough.
///
/// A rejected order is an expected business outcome, reported through
/// `order_accepted`, not an error.
pub fn run_demo(config: &DemoConfig) -> Result<DemoOutcome> {
    let (gadget, watch) = catalog().context("failed to build demo catalog")?;

    let mut customer = Customer::new(
        "John Doe",
        "123 Main St",
        [OrderId::from("Order1"), OrderId::from("Order2")],
        config.income,
    );

    let mut inventory = InventoryStore::new();
    inventory.apply(InventoryAction::Add, "Watch", 10);
    inventory.apply(InventoryAction::Add, "Gadget", 50);
    inventory.apply(InventoryAction::Add, "Lamp", 25);

    let mut ledger = OrderLedger::new();
    let mut order = Order::new("10");
    order.add_product(gadget);
    order.add_product(watch);

    let order_accepted = match ledger.submit(order, &mut customer) {
        Ok(()) => true,
        Err(rejection) => {
            tracing::info!(%rejection, "demo order was not accepted");
            false
        }
    };

    Ok(DemoOutcome {
        inventory,
        ledger,
        customer,
        order_accepted,
    })
}
