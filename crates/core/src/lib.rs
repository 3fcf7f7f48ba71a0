//! `storefront-core` - domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory and
//! sales modules (no IO, no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod report;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use money::Money;
pub use report::Report;
pub use value_object::ValueObject;
