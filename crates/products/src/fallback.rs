//! Built-in sample catalog used when the catalog source cannot be loaded.

use crate::product::Product;

const CDN: &str = "https://mks.blr1.cdn.digitaloceanspaces.com/uploads/2023/11";

/// The fixed three-item fallback catalog.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product::new(
            "Arion Frost x Keychron K8 Pro",
            format!("{CDN}/2.jpg"),
            7999,
            15000,
            "Get Deskmat L (Free)",
        ),
        Product::new(
            "Royal Kludge RK R87 PRO",
            format!("{CDN}/rk87.jpg"),
            4700,
            7000,
            "87-key TKL mechanical gaming keyboard",
        ),
        Product::new(
            "Hello Ganss GS 87C-HT",
            format!("{CDN}/ganss.jpg"),
            3999,
            6499,
            "Compact mechanical keyboard with premium switches",
        ),
    ]
}
