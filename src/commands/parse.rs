//! `parse` command implementation: navigate to a leaf, then export.

use crate::catalog::{CatalogApi, Fetched};
use crate::commands::Console;
use crate::export::{ExportError, Exporter};
use crate::navigator::{NavigateError, Navigator};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Walks the category tree with the user and exports the leaf's products.
pub struct ParseCommand<'a, C: CatalogApi + ?Sized> {
    navigator: Navigator<'a, C>,
    exporter: &'a Exporter,
}

impl<'a, C: CatalogApi + ?Sized> ParseCommand<'a, C> {
    pub fn new(catalog: &'a C, exporter: &'a Exporter) -> Self {
        Self { navigator: Navigator::new(catalog), exporter }
    }

    pub async fn execute<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        let listing = match self.navigator.top_level().await {
            Fetched::Items(listing) => listing,
            Fetched::Empty => return console.say("The catalog has no categories."),
            Fetched::Failed(err) => {
                return console.say(format!("Failed to fetch categories: {}", err));
            }
        };

        let resolution = match self.navigator.resolve(listing, &mut *console).await {
            Ok(resolution) => resolution,
            Err(NavigateError::Cancelled) => return console.say("Cancelled."),
            Err(err) => return console.say(err),
        };

        let trail = resolution.trail();
        let products = match resolution.products {
            Fetched::Items(products) => products,
            Fetched::Empty => return console.say(format!("No products in {}.", trail)),
            Fetched::Failed(err) => {
                return console.say(format!("Failed to fetch products of {}: {}", trail, err));
            }
        };

        console.say(format!("Found {} products in {}.", products.len(), trail))?;

        loop {
            let token = match console.ask("Export format (json/csv): ")? {
                Some(token) if !token.is_empty() => token,
                _ => return console.say("Export cancelled."),
            };

            match self.exporter.export_token(&products, &token) {
                Ok(path) => {
                    info!("Saved {} products from {}", products.len(), trail);
                    return console.say(format!(
                        "Saved {} products to {}",
                        products.len(),
                        path.display()
                    ));
                }
                Err(err @ ExportError::UnsupportedFormat(_)) => console.say(err)?,
                Err(err) => return console.say(format!("Export failed: {}", err)),
            }
        }
    }
}
