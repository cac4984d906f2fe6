//! Offering Quote Binary
//!
//! Prints the tier × billing-cycle breakdown of a catalog document.
//!
//! ```text
//! offering-quote [catalog.json | -]
//! ```

mod config;
mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use offering_pricing::Catalog;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::QuoteConfig;

fn main() -> Result<()> {
    // Initialize tracing; stdout carries the quote
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting offering-quote v{}", offering_common::VERSION);

    let config = QuoteConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let source = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.catalog_path.clone())
        .context("no catalog given: pass a path (or `-` for stdin) or set OFFERING_CATALOG")?;

    let catalog = load_catalog(&source)
        .with_context(|| format!("failed to load catalog {}", source.display()))?;

    let quote = catalog.quote(&config.default_currency, config.budget)?;
    let over = quote.over_budget().count();
    if over > 0 {
        warn!(lines = over, "quote lines exceed the configured budget");
    }

    print!("{}", render::render_quote(&quote));
    Ok(())
}

fn load_catalog(source: &Path) -> offering_common::Result<Catalog> {
    if source.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Catalog::from_json(&input);
    }
    Catalog::from_path(source)
}
