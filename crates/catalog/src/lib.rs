//! Catalog domain module.
//!
//! This crate contains the fixed product list and the category filter over it,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod filter;
pub mod product;

pub use catalog::Catalog;
pub use filter::{CategoryFilter, categories, filtered_products};
pub use product::{Category, Product};
