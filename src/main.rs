//! catalog-crawler - Interactive product catalog browser and exporter

use anyhow::{Context, Result};
use catalog_crawler::commands::{Console, Session};
use catalog_crawler::{CatalogClient, Config, Exporter};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-crawler",
    version,
    about = "Browse a product catalog and export a category's products",
    long_about = "Interactive shell: 'categories' lists top-level categories, 'parse' walks down to a leaf category and exports its products to products.json or products.csv, 'exit' quits."
)]
struct Cli {
    /// Catalog API root URL
    #[arg(long, env = "CATALOG_BASE_URL")]
    base_url: Option<String>,

    /// Directory exported files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    catalog_crawler::logging::init(cli.verbose);

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    config.validate().context("Invalid configuration")?;

    let client = CatalogClient::new(&config).context("Failed to create HTTP client")?;
    let exporter = Exporter::new(config.output_dir.clone(), config.delimiter_byte()?);

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());

    Session::new(&client, exporter, console).run().await.context("Console I/O failed")?;

    Ok(())
}
