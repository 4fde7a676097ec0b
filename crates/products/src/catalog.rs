//! The product catalog: authoritative sequence plus render synchronization.

use storefront_core::{CatalogError, CatalogResult, Price};

use crate::fallback::fallback_products;
use crate::product::{Product, ProductPatch};
use crate::render::{CONTAINER_ID, RenderHost, RenderTarget};
use crate::source::CatalogSource;
use crate::view::{CatalogView, NumberLocale};

/// Load lifecycle of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    /// No load has resolved yet; the sequence is empty.
    Unloaded,
    /// A load resolved (fetched or fallback); the sequence may still be empty.
    Loaded,
}

/// How a `load` call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The source answered with this many products.
    Fetched(usize),
    /// The source failed and the built-in sample catalog was installed.
    Fallback,
}

/// Ordered product list bound to (at most) one render target.
///
/// Every mutating operation re-renders the stored sequence, so the target never
/// shows a stale catalog. Filter and search display a transient subsequence
/// without touching stored state; [`ProductCatalog::restore_view`] (or any
/// mutation) puts the full catalog back.
///
/// No operation fails toward the caller: bad indices are ignored, a missing
/// target disables rendering and load failures fall back to sample data.
#[derive(Debug)]
pub struct ProductCatalog<T> {
    products: Vec<Product>,
    target: Option<T>,
    state: CatalogState,
    locale: NumberLocale,
    transient: bool,
}

impl<T: RenderTarget> Default for ProductCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RenderTarget> ProductCatalog<T> {
    pub fn new() -> Self {
        Self::with_locale(NumberLocale::default())
    }

    pub fn with_locale(locale: NumberLocale) -> Self {
        Self {
            products: Vec::new(),
            target: None,
            state: CatalogState::Unloaded,
            locale,
            transient: false,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn state(&self) -> CatalogState {
        self.state
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the target currently shows a filter/search result.
    pub fn is_showing_transient(&self) -> bool {
        self.transient
    }

    /// Acquire the `products-container` target from `host`.
    ///
    /// Returns whether a target was bound. Without one, every later render is a
    /// no-op for the lifetime of this catalog.
    pub fn initialize<H>(&mut self, host: &mut H) -> bool
    where
        H: RenderHost<Target = T>,
    {
        match host.find_target(CONTAINER_ID) {
            Some(target) => {
                self.target = Some(target);
                true
            }
            None => {
                let err = CatalogError::missing_target(CONTAINER_ID);
                tracing::error!(error = %err, "products container not found; rendering disabled");
                false
            }
        }
    }

    /// Bind a target directly, bypassing host lookup.
    pub fn bind(&mut self, target: T) {
        self.target = Some(target);
    }

    /// Fetch the catalog from `source`, falling back to sample data on any failure.
    ///
    /// Never fails. Either way the catalog ends up `Loaded` and rendered.
    pub async fn load<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: CatalogSource + ?Sized,
    {
        match source.fetch().await {
            Ok(products) => {
                tracing::info!(source = source.location(), count = products.len(), "catalog loaded");
                let count = products.len();
                self.products = products;
                self.state = CatalogState::Loaded;
                self.render();
                LoadOutcome::Fetched(count)
            }
            Err(err) => {
                tracing::error!(source = source.location(), error = %err, "error loading products");
                self.load_fallback();
                LoadOutcome::Fallback
            }
        }
    }

    /// Install the built-in sample catalog and render it.
    pub fn load_fallback(&mut self) {
        tracing::info!("using fallback catalog data");
        self.products = fallback_products();
        self.state = CatalogState::Loaded;
        self.render();
    }

    /// Append `product` at the end of the sequence.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
        self.render();
    }

    /// Overlay `patch` on the product at `index`; ignored when out of bounds.
    pub fn update(&mut self, index: usize, patch: &ProductPatch) {
        if let Err(err) = self.try_update(index, patch) {
            tracing::debug!(error = %err, "update ignored");
        }
    }

    pub fn try_update(&mut self, index: usize, patch: &ProductPatch) -> CatalogResult<()> {
        let len = self.products.len();
        let product = self
            .products
            .get_mut(index)
            .ok_or(CatalogError::InvalidIndex { index, len })?;
        patch.apply_to(product);
        self.render();
        Ok(())
    }

    /// Delete the product at `index`, shifting later ones; ignored when out of bounds.
    pub fn remove(&mut self, index: usize) {
        if let Err(err) = self.try_remove(index) {
            tracing::debug!(error = %err, "remove ignored");
        }
    }

    pub fn try_remove(&mut self, index: usize) -> CatalogResult<Product> {
        let len = self.products.len();
        if index >= len {
            return Err(CatalogError::InvalidIndex { index, len });
        }
        let removed = self.products.remove(index);
        self.render();
        Ok(removed)
    }

    /// Discard the current sequence and substitute `products`.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
        self.render();
    }

    /// The stored products matching `predicate`, in order. Never mutates.
    pub fn compute_view<P>(&self, predicate: P) -> Vec<Product>
    where
        P: Fn(&Product) -> bool,
    {
        self.products.iter().filter(|p| predicate(p)).cloned().collect()
    }

    /// Display `products` without storing them.
    pub fn render_transient(&mut self, products: &[Product]) {
        self.transient = true;
        if self.is_bound() {
            self.present(CatalogView::build(products, self.locale));
        }
    }

    /// Put the stored catalog back on display after a transient view.
    pub fn restore_view(&mut self) {
        self.render();
    }

    /// Show only products with `min <= price <= max`; returns what is shown.
    pub fn filter_by_price_range(&mut self, min: impl Into<Price>, max: impl Into<Price>) -> Vec<Product> {
        let (min, max) = (min.into(), max.into());
        let matches = self.compute_view(|p| p.priced_between(min, max));
        self.render_transient(&matches);
        matches
    }

    /// Show only products whose name contains `query`, ignoring case; returns what is shown.
    pub fn search_by_name(&mut self, query: &str) -> Vec<Product> {
        let matches = self.compute_view(|p| p.name_contains(query));
        self.render_transient(&matches);
        matches
    }

    /// The view for the stored sequence.
    pub fn view(&self) -> CatalogView {
        CatalogView::build(&self.products, self.locale)
    }

    /// Re-render the stored sequence. No-op without a target.
    pub fn render(&mut self) {
        self.transient = false;
        if self.is_bound() {
            let view = self.view();
            self.present(view);
        }
    }

    /// The "Buy Now" hook: logs the intent and acknowledges it on the target.
    pub fn buy_product(&mut self, product_name: &str) -> String {
        tracing::info!(product = product_name, "buying product");
        let message = format!("Added \"{product_name}\" to cart!");
        if let Some(target) = self.target.as_mut() {
            target.acknowledge(&message);
        }
        message
    }

    fn present(&mut self, view: CatalogView) {
        if let Some(target) = self.target.as_mut() {
            tracing::debug!(cards = view.len(), transient = self.transient, "rendering catalog");
            target.present(&view);
        }
    }
}
