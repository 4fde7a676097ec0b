//! Catalog sources backed by HTTP and the filesystem.

use std::path::PathBuf;

use storefront_core::{CatalogError, CatalogResult};
use storefront_products::{CatalogSource, Product, parse_catalog};

/// Fetches the catalog with a plain GET.
///
/// No timeout is configured: a request that never resolves keeps the catalog
/// unloaded.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> CatalogResult<Vec<Product>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;
        parse_catalog(&body)
    }
}

/// Reads the catalog from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> CatalogResult<Vec<Product>> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::transport(format!("{}: {e}", self.location)))?;
        parse_catalog(&body)
    }
}

/// Pick a source for `location`: `http(s)://` URLs go over the network,
/// anything else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
