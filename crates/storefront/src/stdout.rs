//! Stdout host: every render is printed, one document per render.

use std::io::Write;

use storefront_products::{CatalogView, RenderHost, RenderTarget, render_fragment};

use crate::config::OutputFormat;

/// Binds any container name to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutHost {
    format: OutputFormat,
}

impl StdoutHost {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl RenderHost for StdoutHost {
    type Target = StdoutTarget;

    fn find_target(&mut self, _id: &str) -> Option<StdoutTarget> {
        Some(StdoutTarget { format: self.format })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StdoutTarget {
    format: OutputFormat,
}

impl StdoutTarget {
    /// The text printed for `view`.
    pub fn document(&self, view: &CatalogView) -> String {
        match self.format {
            OutputFormat::Html => match render_fragment(view) {
                Ok(html) => html,
                Err(err) => {
                    tracing::error!("failed to render catalog fragment: {err}");
                    String::new()
                }
            },
            OutputFormat::Json => match serde_json::to_string_pretty(view) {
                Ok(json) => json,
                Err(err) => {
                    tracing::error!("failed to serialize catalog view: {err:?}");
                    String::new()
                }
            },
        }
    }
}

impl RenderTarget for StdoutTarget {
    fn present(&mut self, view: &CatalogView) {
        let document = self.document(view);
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{document}") {
            tracing::error!("failed to write catalog to stdout: {err:?}");
        }
    }

    fn acknowledge(&mut self, message: &str) {
        tracing::info!("{message}");
    }
}
