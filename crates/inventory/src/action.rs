use serde::{Deserialize, Serialize};

use crate::store::StockLevels;

/// Inventory mutation kinds.
///
/// The set is closed: every action is handled by an exhaustive match, so an
/// unrecognized action cannot be expressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryAction {
    /// Increase stock by `quantity` (a negative delta decreases it).
    Add,
    /// Remove the item entirely; `quantity` is ignored.
    Delete,
    /// Set stock to exactly `quantity`.
    Update,
}

impl InventoryAction {
    /// Stable action name (e.g. for logs).
    pub fn as_str(self) -> &'static str {
        match self {
            InventoryAction::Add => "add",
            InventoryAction::Delete => "delete",
            InventoryAction::Update => "update",
        }
    }

    /// Apply this action's mutation rule to `levels`.
    ///
    /// Returns the item's quantity afterwards (`None` once deleted).
    pub fn execute(self, levels: &mut StockLevels, item: &str, quantity: i64) -> Option<i64> {
        match self {
            InventoryAction::Add => {
                let slot = levels.entry(item.to_string()).or_insert(0);
                *slot = slot.saturating_add(quantity);
                Some(*slot)
            }
            InventoryAction::Delete => {
                levels.remove(item);
                None
            }
            InventoryAction::Update => {
                levels.insert(item.to_string(), quantity);
                Some(quantity)
            }
        }
    }
}

impl core::fmt::Display for InventoryAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
