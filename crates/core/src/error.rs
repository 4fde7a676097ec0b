//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// None of these escape the catalog's fail-soft operations: load failures are
/// replaced by fallback data, a missing render target disables rendering, and
/// an invalid index is ignored. The variants exist so the recovery paths can
/// log what happened and so the `try_*` operations can report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog source could not be reached or read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The catalog source answered with a non-success status.
    #[error("catalog source returned status {0}")]
    Status(u16),

    /// The catalog source answered with something that is not a product list.
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// The catalog markup could not be rendered.
    #[error("template error: {0}")]
    Template(String),

    /// No render target with the given name exists.
    #[error("render target not found: {0}")]
    MissingRenderTarget(String),

    /// An index outside `[0, len)` was used.
    #[error("index {index} out of bounds for catalog of length {len}")]
    InvalidIndex { index: usize, len: usize },
}

impl CatalogError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn missing_target(name: impl Into<String>) -> Self {
        Self::MissingRenderTarget(name.into())
    }
}
