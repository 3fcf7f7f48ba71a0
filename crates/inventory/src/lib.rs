//! Inventory domain module.
//!
//! Tracks stock quantities per item name. A closed set of actions
//! (add / delete / update) mutates the stock, implemented purely as
//! deterministic in-memory logic (no IO, no storage).

pub mod action;
pub mod store;

pub use action::InventoryAction;
pub use store::{InventoryStore, StockLevels};
