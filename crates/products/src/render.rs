//! Render surface seams.
//!
//! The catalog never touches a presentation surface directly. A host is asked
//! once for the target bound to [`CONTAINER_ID`]; that target then receives a
//! fresh [`CatalogView`] after every state change.

use crate::view::CatalogView;

/// Logical name of the element the catalog renders into.
pub const CONTAINER_ID: &str = "products-container";

/// A surface that displays catalog views.
pub trait RenderTarget {
    /// Replace whatever is displayed with `view`.
    fn present(&mut self, view: &CatalogView);

    /// Surface a user-visible acknowledgement (e.g. after "Buy Now").
    fn acknowledge(&mut self, message: &str) {
        let _ = message;
    }
}

/// Looks up render targets by name.
pub trait RenderHost {
    type Target: RenderTarget;

    fn find_target(&mut self, id: &str) -> Option<Self::Target>;
}
