//! Parties domain module (customers).
//!
//! Customers carry the funds that orders are charged against. Payment is an
//! explicit, fallible capability on `&mut Customer`.

pub mod customer;

pub use customer::{Customer, InsufficientFunds};
