//! HTML page host: injects the catalog fragment into a page template.

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;
use storefront_core::CatalogResult;
use storefront_products::{CatalogView, RenderHost, RenderTarget, render_fragment};

/// A page template that may contain render containers.
#[derive(Debug, Clone)]
pub struct PageHost {
    html: String,
    output: PathBuf,
}

impl PageHost {
    pub fn new(html: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            html: html.into(),
            output: output.into(),
        }
    }

    /// Load the template at `page`; rendered pages are written to `output`.
    pub fn open(page: &Path, output: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let html = std::fs::read_to_string(page)
            .with_context(|| format!("failed to read page template at {:?}", page))?;
        Ok(Self::new(html, output))
    }
}

impl RenderHost for PageHost {
    type Target = PageTarget;

    /// Finds the element whose `id` attribute equals `id` and binds to its
    /// content, children included. The content is replaced wholesale on
    /// every render.
    fn find_target(&mut self, id: &str) -> Option<PageTarget> {
        let content = match locate_container(&self.html, id) {
            Ok(content) => content?,
            Err(err) => {
                tracing::error!("failed to scan page template: {err}");
                return None;
            }
        };

        Some(PageTarget {
            head: self.html[..content.start].to_string(),
            tail: self.html[content.end..].to_string(),
            output: self.output.clone(),
            writes: 0,
        })
    }
}

const TAG: &str = r#"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#;
const ATTRIBUTE: &str =
    r#"(?:^|\s)([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#;

/// Byte range of the content of the element with the given id, between the
/// end of its start tag and the start of its matching end tag.
///
/// Self-closing and unclosed elements have no content range.
fn locate_container(html: &str, id: &str) -> Result<Option<Range<usize>>, regex::Error> {
    let tag = Regex::new(TAG)?;
    let attribute = Regex::new(ATTRIBUTE)?;

    let Some(open) = tag
        .captures_iter(html)
        .find(|caps| caps[1].is_empty() && has_id(&attribute, &caps[3], id))
    else {
        return Ok(None);
    };
    if is_self_closing(&open[3]) {
        return Ok(None);
    }
    let name = &open[2];
    let content_start = open.get(0).map_or(0, |m| m.end());

    let mut depth = 1usize;
    for caps in tag.captures_iter(&html[content_start..]) {
        if !caps[2].eq_ignore_ascii_case(name) {
            continue;
        }
        if caps[1].is_empty() {
            if !is_self_closing(&caps[3]) {
                depth += 1;
            }
            continue;
        }
        depth -= 1;
        if depth == 0 {
            let content_end = content_start + caps.get(0).map_or(0, |m| m.start());
            return Ok(Some(content_start..content_end));
        }
    }
    Ok(None)
}

fn has_id(attribute: &Regex, attrs: &str, id: &str) -> bool {
    attribute.captures_iter(attrs).any(|caps| {
        caps[1].eq_ignore_ascii_case("id")
            && (2..=4)
                .find_map(|group| caps.get(group))
                .is_some_and(|value| value.as_str() == id)
    })
}

fn is_self_closing(attrs: &str) -> bool {
    attrs.trim_end().ends_with('/')
}

/// The content of one container element in a page template.
#[derive(Debug, Clone)]
pub struct PageTarget {
    head: String,
    tail: String,
    output: PathBuf,
    writes: usize,
}

impl PageTarget {
    /// The full page with `view` rendered into the container.
    pub fn page_with(&self, view: &CatalogView) -> CatalogResult<String> {
        Ok(format!("{}{}{}", self.head, render_fragment(view)?, self.tail))
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Number of successful page writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RenderTarget for PageTarget {
    fn present(&mut self, view: &CatalogView) {
        let page = match self.page_with(view) {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(output = ?self.output, "failed to render page: {err}");
                return;
            }
        };
        match std::fs::write(&self.output, page) {
            Ok(()) => {
                self.writes += 1;
                tracing::debug!(output = ?self.output, cards = view.len(), "page written");
            }
            Err(err) => {
                tracing::error!(output = ?self.output, "failed to write rendered page: {err:?}");
            }
        }
    }

    fn acknowledge(&mut self, message: &str) {
        tracing::info!(output = ?self.output, "{message}");
    }
}
