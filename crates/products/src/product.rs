use serde::{Deserialize, Serialize};

use storefront_core::{Price, ValueObject};

/// A purchasable item as displayed on a catalog card.
///
/// Names are display strings, not identifiers: two products may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    /// Image URL; empty when the source omits it (the card falls back to a placeholder).
    #[serde(default)]
    pub image: String,
    pub price: Price,
    pub original_price: Price,
    #[serde(default)]
    pub description: String,
}

impl ValueObject for Product {}

impl Product {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: u64,
        original_price: u64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price: Price::new(price),
            original_price: Price::new(original_price),
            description: description.into(),
        }
    }

    /// Whether the card should advertise a discount.
    ///
    /// `original_price < price` is accepted as-is; such a product is simply not
    /// discounted.
    pub fn is_discounted(&self) -> bool {
        self.original_price > self.price
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Inclusive price range check.
    pub fn priced_between(&self, min: Price, max: Price) -> bool {
        min <= self.price && self.price <= max
    }

    /// Returns a copy with `patch` overlaid.
    pub fn patched(&self, patch: &ProductPatch) -> Self {
        let mut next = self.clone();
        patch.apply_to(&mut next);
        next
    }
}

/// Partial product fields for a shallow merge: `Some` overwrites, `None` keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<Price>,
    pub original_price: Option<Price>,
    pub description: Option<String>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price = Some(Price::new(price));
        self
    }

    pub fn original_price(mut self, original_price: u64) -> Self {
        self.original_price = Some(Price::new(original_price));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> Product {
        Product::new("Royal Kludge RK R87 PRO", "rk87.jpg", 4700, 7000, "87-key TKL")
    }

    #[test]
    fn deserializes_camel_case_wire_names() {
        let json = r#"{
            "name": "Hello Ganss GS 87C-HT",
            "image": "ganss.jpg",
            "price": 3999,
            "originalPrice": 6499,
            "description": "Compact"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Hello Ganss GS 87C-HT");
        assert_eq!(product.price.amount(), 3999);
        assert_eq!(product.original_price.amount(), 6499);
    }

    #[test]
    fn image_and_description_default_to_empty() {
        let json = r#"{"name": "Bare", "price": 10, "originalPrice": 12}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.image.is_empty());
        assert!(product.description.is_empty());
    }

    #[test]
    fn missing_price_is_rejected() {
        let json = r#"{"name": "No price", "originalPrice": 12}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn patch_overwrites_only_given_fields() {
        let patched = keyboard().patched(&ProductPatch::default().price(4200).description("On sale"));

        assert_eq!(patched.price, Price::new(4200));
        assert_eq!(patched.description, "On sale");
        assert_eq!(patched.name, "Royal Kludge RK R87 PRO");
        assert_eq!(patched.image, "rk87.jpg");
        assert_eq!(patched.original_price, Price::new(7000));
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = ProductPatch::default();
        assert_eq!(keyboard().patched(&patch), keyboard());
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: ProductPatch = serde_json::from_str(r#"{"originalPrice": 9000}"#).unwrap();
        assert_eq!(patch, ProductPatch::default().original_price(9000));
    }

    #[test]
    fn name_match_ignores_case() {
        let product = keyboard();
        assert!(product.name_contains("kludge"));
        assert!(product.name_contains("R87 pro"));
        assert!(product.name_contains(""));
        assert!(!product.name_contains("keychron"));
    }

    #[test]
    fn price_range_is_inclusive() {
        let product = keyboard();
        assert!(product.priced_between(Price::new(4700), Price::new(4700)));
        assert!(product.priced_between(Price::new(0), Price::new(5000)));
        assert!(!product.priced_between(Price::new(4701), Price::new(9000)));
    }

    #[test]
    fn discount_requires_higher_original_price() {
        assert!(keyboard().is_discounted());
        assert!(!Product::new("Flat", "", 100, 100, "").is_discounted());
        assert!(!Product::new("Inverted", "", 100, 50, "").is_discounted());
    }
}
