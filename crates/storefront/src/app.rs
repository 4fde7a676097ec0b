//! Wiring: bind the catalog to a host, load it, apply the requested view.

use storefront_products::{LoadOutcome, ProductCatalog, RenderHost};

use crate::config::{Config, ViewRequest};
use crate::sources::source_for;

/// Build and load a catalog rendered through `host`.
///
/// Missing containers and load failures are recovered inside the catalog, so
/// this never fails; the returned catalog is `Loaded`.
pub async fn run<H>(config: &Config, host: &mut H) -> ProductCatalog<H::Target>
where
    H: RenderHost,
{
    let mut catalog = ProductCatalog::with_locale(config.locale);
    catalog.initialize(host);

    let source = source_for(&config.source);
    match catalog.load(source.as_ref()).await {
        LoadOutcome::Fetched(count) => tracing::info!(count, "catalog ready"),
        LoadOutcome::Fallback => tracing::warn!("catalog ready with fallback data"),
    }

    match &config.view {
        Some(ViewRequest::Search(query)) => {
            let shown = catalog.search_by_name(query);
            tracing::info!(query = %query, matches = shown.len(), "search applied");
        }
        Some(ViewRequest::PriceRange { min, max }) => {
            let shown = catalog.filter_by_price_range(*min, *max);
            tracing::info!(min, max, matches = shown.len(), "price filter applied");
        }
        None => {}
    }

    catalog
}
