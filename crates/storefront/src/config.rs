//! Environment configuration for the `storefront` binary.

use std::path::{Path, PathBuf};

use storefront_products::NumberLocale;

pub const DEFAULT_SOURCE: &str = "products.json";

pub const ENV_SOURCE: &str = "STOREFRONT_CATALOG_SOURCE";
pub const ENV_PAGE: &str = "STOREFRONT_PAGE";
pub const ENV_OUTPUT: &str = "STOREFRONT_OUTPUT";
pub const ENV_LOCALE: &str = "STOREFRONT_LOCALE";
pub const ENV_FORMAT: &str = "STOREFRONT_FORMAT";
pub const ENV_SEARCH: &str = "STOREFRONT_SEARCH";
pub const ENV_PRICE_RANGE: &str = "STOREFRONT_PRICE_RANGE";

/// How stdout renders are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The card markup fragment.
    #[default]
    Html,
    /// The card view-model as JSON.
    Json,
}

/// A transient view to show after the catalog loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    Search(String),
    PriceRange { min: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL or file path of the catalog.
    pub source: String,
    /// Page template containing the `products-container` element. Without
    /// one, renders go to stdout.
    pub page: Option<PathBuf>,
    /// Where the rendered page is written.
    pub output: Option<PathBuf>,
    pub locale: NumberLocale,
    pub format: OutputFormat,
    pub view: Option<ViewRequest>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Invalid values are logged and
    /// replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let source = get(ENV_SOURCE).unwrap_or_else(|| {
            tracing::warn!("{ENV_SOURCE} not set; using {DEFAULT_SOURCE}");
            DEFAULT_SOURCE.to_string()
        });

        let page = get(ENV_PAGE).map(PathBuf::from);
        let output = get(ENV_OUTPUT)
            .map(PathBuf::from)
            .or_else(|| page.as_deref().map(default_output_for));

        let locale = match get(ENV_LOCALE) {
            None => NumberLocale::default(),
            Some(tag) => NumberLocale::parse(&tag).unwrap_or_else(|| {
                tracing::warn!("unsupported {ENV_LOCALE} {tag:?}; using en-IN");
                NumberLocale::default()
            }),
        };

        let format = match get(ENV_FORMAT).map(|f| f.to_ascii_lowercase()).as_deref() {
            None | Some("html") => OutputFormat::Html,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                tracing::warn!("unsupported {ENV_FORMAT} {other:?}; using html");
                OutputFormat::Html
            }
        };

        let view = match (get(ENV_SEARCH), get(ENV_PRICE_RANGE)) {
            (Some(query), range) => {
                if range.is_some() {
                    tracing::warn!("both {ENV_SEARCH} and {ENV_PRICE_RANGE} set; using search");
                }
                Some(ViewRequest::Search(query))
            }
            (None, Some(range)) => parse_price_range(&range).or_else(|| {
                tracing::warn!("invalid {ENV_PRICE_RANGE} {range:?}; expected MIN-MAX");
                None
            }),
            (None, None) => None,
        };

        Self {
            source,
            page,
            output,
            locale,
            format,
            view,
        }
    }
}

/// `page.html` renders to `page.rendered.html` in the same directory.
fn default_output_for(page: &Path) -> PathBuf {
    let stem = page
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string());
    page.with_file_name(format!("{stem}.rendered.html"))
}

fn parse_price_range(raw: &str) -> Option<ViewRequest> {
    let (min, max) = raw.split_once('-')?;
    let min = min.trim().parse().ok()?;
    let max = max.trim().parse().ok()?;
    Some(ViewRequest::PriceRange { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_render_products_json_to_stdout() {
        let cfg = config(&[]);
        assert_eq!(cfg.source, "products.json");
        assert_eq!(cfg.page, None);
        assert_eq!(cfg.output, None);
        assert_eq!(cfg.locale, NumberLocale::EnIn);
        assert_eq!(cfg.format, OutputFormat::Html);
        assert_eq!(cfg.view, None);
    }

    #[test]
    fn page_output_defaults_next_to_page() {
        let cfg = config(&[(ENV_PAGE, "site/index.html")]);
        assert_eq!(cfg.output, Some(PathBuf::from("site/index.rendered.html")));

        let cfg = config(&[(ENV_PAGE, "site/index.html"), (ENV_OUTPUT, "dist/index.html")]);
        assert_eq!(cfg.output, Some(PathBuf::from("dist/index.html")));
    }

    #[test]
    fn locale_and_format_are_parsed() {
        let cfg = config(&[(ENV_LOCALE, "en-US"), (ENV_FORMAT, "JSON")]);
        assert_eq!(cfg.locale, NumberLocale::EnUs);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = config(&[(ENV_LOCALE, "klingon"), (ENV_FORMAT, "xml"), (ENV_PRICE_RANGE, "cheap")]);
        assert_eq!(cfg.locale, NumberLocale::EnIn);
        assert_eq!(cfg.format, OutputFormat::Html);
        assert_eq!(cfg.view, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = config(&[(ENV_SOURCE, "   "), (ENV_SEARCH, "")]);
        assert_eq!(cfg.source, DEFAULT_SOURCE);
        assert_eq!(cfg.view, None);
    }

    #[test]
    fn view_requests_are_parsed() {
        let cfg = config(&[(ENV_PRICE_RANGE, "4000 - 8000")]);
        assert_eq!(cfg.view, Some(ViewRequest::PriceRange { min: 4000, max: 8000 }));

        let cfg = config(&[(ENV_SEARCH, "keychron"), (ENV_PRICE_RANGE, "1-2")]);
        assert_eq!(cfg.view, Some(ViewRequest::Search("keychron".to_string())));
    }
}
