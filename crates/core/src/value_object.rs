//! Value object trait: equality by value, not identity.
//!
//! Catalog records have no identity: two products with the same fields are the
//! same product as far as the catalog is concerned, and names are not unique.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values and are cheap to
/// clone. To "modify" one, build a new value (or overlay a patch on a copy).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(7999), Price(7999));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
