//! `categories` command implementation.

use crate::catalog::{CatalogApi, Fetched};
use crate::commands::Console;
use crate::navigator::{render_listing, Navigator};
use std::io::{self, BufRead, Write};

/// Prints the numbered top-level category listing.
pub struct CategoriesCommand<'a, C: CatalogApi + ?Sized> {
    navigator: Navigator<'a, C>,
}

impl<'a, C: CatalogApi + ?Sized> CategoriesCommand<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { navigator: Navigator::new(catalog) }
    }

    pub async fn execute<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        match self.navigator.top_level().await {
            Fetched::Items(listing) => {
                for line in render_listing(&listing) {
                    console.say(line)?;
                }
                Ok(())
            }
            Fetched::Empty => console.say("The catalog has no categories."),
            Fetched::Failed(err) => console.say(format!("Failed to fetch categories: {}", err)),
        }
    }
}
