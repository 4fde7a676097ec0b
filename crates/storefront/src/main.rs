use anyhow::Context;

use storefront::{Config, PageHost, StdoutHost};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = Config::from_env();

    match (&config.page, &config.output) {
        (Some(page), Some(output)) => {
            let mut host = PageHost::open(page, output.clone())
                .context("failed to prepare page host")?;
            let catalog = storefront::app::run(&config, &mut host).await;
            if let Some(target) = catalog.target() {
                tracing::info!(output = ?target.output(), writes = target.writes(), "page rendered");
            }
        }
        _ => {
            let mut host = StdoutHost::new(config.format);
            storefront::app::run(&config, &mut host).await;
        }
    }

    Ok(())
}
