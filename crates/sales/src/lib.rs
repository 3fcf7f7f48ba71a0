//! Sales domain module.
//!
//! Orders bundle products; the order ledger validates that a customer can
//! afford an order, charges the customer and records the accepted order.
//! Purely in-memory (no IO, no storage).

pub mod ledger;
pub mod order;

pub use ledger::{LedgerEntry, OrderLedger, OrderRejection};
pub use order::Order;
