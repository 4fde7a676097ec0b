//! Catalog source abstraction.

use storefront_core::{CatalogError, CatalogResult};

use crate::product::Product;

/// Where a catalog comes from (HTTP endpoint, file, fixture).
///
/// Implementations report every failure as a load-failure `CatalogError`
/// (`Transport`, `Status` or `Malformed`); the catalog turns any of them into
/// fallback data.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn location(&self) -> &str;

    async fn fetch(&self) -> CatalogResult<Vec<Product>>;
}

/// Parse a catalog body: a JSON array of product records.
pub fn parse_catalog(body: &[u8]) -> CatalogResult<Vec<Product>> {
    serde_json::from_slice(body).map_err(|e| CatalogError::malformed(e.to_string()))
}

/// A source that always answers with the same result.
#[derive(Debug, Clone)]
pub struct StaticSource {
    location: String,
    result: CatalogResult<Vec<Product>>,
}

impl StaticSource {
    pub fn ok(products: Vec<Product>) -> Self {
        Self {
            location: "static".to_string(),
            result: Ok(products),
        }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self {
            location: "static".to_string(),
            result: Err(error),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> CatalogResult<Vec<Product>> {
        self.result.clone()
    }
}
