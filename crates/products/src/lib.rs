//! Product catalog module.
//!
//! This crate holds the authoritative product sequence and keeps a render
//! target in sync with it. Everything here is deterministic apart from the
//! single `CatalogSource::fetch` await inside [`ProductCatalog::load`]; the
//! sources, hosts and targets that touch the outside world live in the
//! `storefront` crate.

pub mod catalog;
pub mod fallback;
pub mod product;
pub mod render;
pub mod source;
pub mod view;

pub use catalog::{CatalogState, LoadOutcome, ProductCatalog};
pub use fallback::fallback_products;
pub use product::{Product, ProductPatch};
pub use render::{CONTAINER_ID, RenderHost, RenderTarget};
pub use source::{CatalogSource, StaticSource, parse_catalog};
pub use view::{BuyAction, CatalogView, NumberLocale, ProductCard, placeholder_image, render_fragment};
