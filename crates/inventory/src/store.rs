use std::collections::BTreeMap;

use storefront_core::Report;

use crate::action::InventoryAction;

/// Item name → quantity on hand.
///
/// Ordered by item name so reports are deterministic.
pub type StockLevels = BTreeMap<String, i64>;

/// In-memory inventory.
///
/// Quantities may go negative: neither `Add` with a negative delta nor
/// `Update` to a negative value is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    levels: StockLevels,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch `action` against `item`. Never fails.
    pub fn apply(&mut self, action: InventoryAction, item: &str, quantity: i64) {
        let resulting = action.execute(&mut self.levels, item, quantity);
        tracing::debug!(%action, item, quantity, ?resulting, "inventory action applied");
    }

    /// Live view of every stock level.
    pub fn snapshot(&self) -> &StockLevels {
        &self.levels
    }

    /// Quantity on hand for `item`, if tracked.
    pub fn quantity(&self, item: &str) -> Option<i64> {
        self.levels.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.levels.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// `"Inventory Report:"` followed by one `"<item>: <quantity>"` line per item.
    pub fn report(&self) -> String {
        let mut report = Report::new("Inventory");
        for (item, quantity) in &self.levels {
            report.entry(item, quantity);
        }
        report.finish()
    }
}
