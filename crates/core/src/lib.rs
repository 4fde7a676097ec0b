//! `storefront-core` — shared building blocks for the storefront catalog.
//!
//! This crate contains **pure** primitives (no IO, no rendering).

pub mod error;
pub mod price;
pub mod value_object;

pub use error::{CatalogError, CatalogResult};
pub use price::Price;
pub use value_object::ValueObject;
