//! Card view-model and HTML fragment rendering.
//!
//! [`CatalogView::build`] is a pure mapping from a product sequence to card
//! descriptors; [`render_fragment`] turns those descriptors into the card
//! markup. Binding the markup to a page is a render target's job.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use storefront_core::{CatalogError, CatalogResult, Price};

use crate::product::Product;

const CURRENCY_SYMBOL: &str = "₹";
const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/300";
const CATALOG_TEMPLATE: &str = "catalog.html";

static TEMPLATES: LazyLock<tera::Result<Tera>> = LazyLock::new(init_templates);

/// Digit grouping used for price labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    /// Indian grouping: last three digits, then pairs (`12,34,567`).
    #[default]
    #[serde(rename = "en-IN")]
    EnIn,
    /// Western grouping: thousands (`1,234,567`).
    #[serde(rename = "en-US")]
    EnUs,
}

impl NumberLocale {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-in" => Some(NumberLocale::EnIn),
            "en-us" => Some(NumberLocale::EnUs),
            _ => None,
        }
    }

    pub fn format(self, amount: u64) -> String {
        let digits = amount.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let group = match self {
            NumberLocale::EnIn => 2,
            NumberLocale::EnUs => 3,
        };

        // Group `head` from the right.
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(group);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{}", groups.join(","), tail)
    }

    pub fn price_label(self, price: Price) -> String {
        format!("{CURRENCY_SYMBOL}{}", self.format(price.amount()))
    }
}

/// The "Buy Now" hook carried by each card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyAction {
    pub product_name: String,
}

/// Everything a surface needs to draw one product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Display position (0-based).
    pub index: usize,
    pub name: String,
    /// Empty when the source had none; the markup then uses the placeholder image.
    pub image: String,
    pub price_label: String,
    /// Always displayed (struck through), even when it is not above the price.
    pub original_price_label: String,
    /// `original_price > price`; informational, the markup does not depend on it.
    pub discounted: bool,
    pub description: String,
    /// Staggered entrance animation, e.g. `"0.2s"` for the third card.
    pub animation_delay: String,
    pub buy: BuyAction,
}

impl ProductCard {
    pub fn build(index: usize, product: &Product, locale: NumberLocale) -> Self {
        Self {
            index,
            name: product.name.clone(),
            image: product.image.clone(),
            price_label: locale.price_label(product.price),
            original_price_label: locale.price_label(product.original_price),
            discounted: product.is_discounted(),
            description: product.description.clone(),
            animation_delay: format!("{:.1}s", index as f64 * 0.1),
            buy: BuyAction {
                product_name: product.name.clone(),
            },
        }
    }
}

/// A rendered catalog: one card per product, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogView {
    pub cards: Vec<ProductCard>,
}

impl CatalogView {
    pub fn build(products: &[Product], locale: NumberLocale) -> Self {
        Self {
            cards: products
                .iter()
                .enumerate()
                .map(|(index, product)| ProductCard::build(index, product, locale))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Render the card markup for `view`. An empty view renders to an empty string.
///
/// Product text is HTML-escaped by the template engine.
pub fn render_fragment(view: &CatalogView) -> CatalogResult<String> {
    if view.is_empty() {
        return Ok(String::new());
    }

    let tera = TEMPLATES
        .as_ref()
        .map_err(|e| CatalogError::template(e.to_string()))?;
    let context = Context::from_serialize(view).map_err(|e| CatalogError::template(e.to_string()))?;
    tera.render(CATALOG_TEMPLATE, &context)
        .map_err(|e| CatalogError::template(e.to_string()))
}

fn init_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    register_template_filters(&mut tera);
    tera.add_raw_template(CATALOG_TEMPLATE, include_str!("../templates/catalog.html"))?;
    Ok(tera)
}

/// Register custom Tera filters used by the catalog template.
///
/// - `placeholder_image`: placeholder image URL for a product name, e.g. `card.name | placeholder_image`
fn register_template_filters(tera: &mut Tera) {
    tera.register_filter("placeholder_image", tera_placeholder_image_filter);
}

fn tera_placeholder_image_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("placeholder_image filter expects a string input"))?;
    Ok(tera::Value::String(placeholder_image(name)))
}

/// The placeholder image shown when a product image is missing or fails to load.
pub fn placeholder_image(name: &str) -> String {
    format!("{PLACEHOLDER_IMAGE}?text={}", encode_uri_component(name))
}

/// Percent-encode like `encodeURIComponent`, except that `'` is encoded too so
/// the result can sit inside a single-quoted script string.
fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_products;

    #[test]
    fn indian_grouping_uses_pairs_after_the_first_thousand() {
        let en_in = NumberLocale::EnIn;
        assert_eq!(en_in.format(0), "0");
        assert_eq!(en_in.format(999), "999");
        assert_eq!(en_in.format(7999), "7,999");
        assert_eq!(en_in.format(15000), "15,000");
        assert_eq!(en_in.format(100000), "1,00,000");
        assert_eq!(en_in.format(1234567), "12,34,567");
        assert_eq!(en_in.format(123456789), "12,34,56,789");
    }

    #[test]
    fn western_grouping_uses_thousands() {
        let en_us = NumberLocale::EnUs;
        assert_eq!(en_us.format(7999), "7,999");
        assert_eq!(en_us.format(1234567), "1,234,567");
        assert_eq!(en_us.format(100000), "100,000");
    }

    #[test]
    fn locale_tags_parse_loosely() {
        assert_eq!(NumberLocale::parse("en-IN"), Some(NumberLocale::EnIn));
        assert_eq!(NumberLocale::parse(" en_us "), Some(NumberLocale::EnUs));
        assert_eq!(NumberLocale::parse("fr-FR"), None);
    }

    #[test]
    fn cards_follow_product_order_with_staggered_delays() {
        let view = CatalogView::build(&fallback_products(), NumberLocale::EnIn);

        assert_eq!(
            view.names(),
            vec!["Arion Frost x Keychron K8 Pro", "Royal Kludge RK R87 PRO", "Hello Ganss GS 87C-HT"]
        );
        let delays: Vec<_> = view.cards.iter().map(|c| c.animation_delay.as_str()).collect();
        assert_eq!(delays, vec!["0.0s", "0.1s", "0.2s"]);

        let first = &view.cards[0];
        assert_eq!(first.price_label, "₹7,999");
        assert_eq!(first.original_price_label, "₹15,000");
        assert!(first.discounted);
        assert_eq!(first.buy.product_name, "Arion Frost x Keychron K8 Pro");
        assert_eq!(
            placeholder_image(&first.name),
            "/api/placeholder/300/300?text=Arion%20Frost%20x%20Keychron%20K8%20Pro"
        );
    }

    #[test]
    fn uri_component_encoding_matches_browser_rules() {
        assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_uri_component("(x)*!~._-"), "(x)*!~._-");
        assert_eq!(encode_uri_component("it's"), "it%27s");
        assert_eq!(encode_uri_component("₹"), "%E2%82%B9");
    }

    #[test]
    fn empty_view_renders_no_cards() {
        assert_eq!(render_fragment(&CatalogView::default()).unwrap(), "");
    }

    #[test]
    fn fragment_contains_one_card_per_product() {
        let view = CatalogView::build(&fallback_products(), NumberLocale::EnIn);
        let html = render_fragment(&view).unwrap();

        assert_eq!(html.matches("data-buy=").count(), 3);
        assert!(html.contains("₹4,700"));
        assert!(html.contains("line-through\">₹7,000"));
        assert!(html.contains("animation-delay: 0.2s"));
        assert!(html.contains("Buy Now"));
    }

    #[test]
    fn fragment_escapes_product_text() {
        let product = Product::new("<script>alert(1)</script>", "", 10, 5, "\"quoted\" & more");
        let html = render_fragment(&CatalogView::build(&[product], NumberLocale::EnIn)).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; more"));
    }

    #[test]
    fn original_price_is_shown_even_without_discount() {
        let product = Product::new("Flat", "flat.png", 500, 400, "");
        let view = CatalogView::build(&[product], NumberLocale::EnIn);
        let html = render_fragment(&view).unwrap();

        assert!(!view.cards[0].discounted);
        assert!(html.contains("line-through\">₹400</h2>"));
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let product = Product::new("No Image", "", 10, 20, "");
        let html = render_fragment(&CatalogView::build(&[product], NumberLocale::EnIn)).unwrap();
        assert!(html.contains(r#"src="/api/placeholder/300/300?text=No%20Image""#));
        assert!(html.contains("onerror=\"this.src='/api/placeholder/300/300?text=No%20Image'\""));
    }

    #[test]
    fn placeholder_survives_quotes_in_names() {
        let product = Product::new("Rock'n \"Roll\"", "x.png", 10, 20, "");
        let html = render_fragment(&CatalogView::build(&[product], NumberLocale::EnIn)).unwrap();
        assert!(html.contains("this.src='/api/placeholder/300/300?text=Rock%27n%20%22Roll%22'"));
    }
}
