//! `storefront`
//!
//! **Responsibility:** the concrete collaborators around the product catalog.
//!
//! This crate provides:
//! - Catalog sources (HTTP endpoint or local JSON file)
//! - Render hosts (an HTML page with a `products-container` element, or stdout)
//! - Environment configuration and the `storefront` binary
//!
//! The catalog itself lives in `storefront-products`; this crate is a **thin
//! shell** that wires it to the outside world.

pub mod app;
pub mod config;
pub mod page;
pub mod sources;
pub mod stdout;

pub use config::{Config, OutputFormat, ViewRequest};
pub use page::{PageHost, PageTarget};
pub use sources::{FileSource, HttpSource, source_for};
pub use stdout::{StdoutHost, StdoutTarget};
