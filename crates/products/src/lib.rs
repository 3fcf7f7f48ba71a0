//! Products domain module.
//!
//! Catalog value objects consumed by orders: products, their physical
//! dimensions and their manufacturer. Pure data, no IO.

pub mod manufacturer;
pub mod product;

pub use manufacturer::Manufacturer;
pub use product::{Dimensions, Product};
