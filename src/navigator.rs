//! Category tree navigation down to a product-bearing leaf.
//!
//! Subcategory presence is detected by probing: selecting a category
//! fetches its children, and only an empty (successful) answer makes it a
//! leaf whose products may be fetched.

use crate::catalog::{CatalogApi, CatalogError, Category, Fetched, Product};
use thiserror::Error;
use tracing::{debug, info};

/// User-facing navigation failures.
#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("invalid selection '{input}': choose a number from 1 to {count}")]
    InvalidSelection { input: String, count: usize },

    #[error("no categories to choose from")]
    EmptyListing,

    #[error("selection cancelled")]
    Cancelled,

    #[error("could not list subcategories of '{category}': {source}")]
    Unavailable {
        category: String,
        #[source]
        source: CatalogError,
    },
}

/// A category known to have no subcategories.
///
/// Only the navigator builds these, so products are never fetched for a
/// category that still has children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafCategory(Category);

impl LeafCategory {
    pub fn category(&self) -> &Category {
        &self.0
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

/// Result of probing one selected category.
#[derive(Debug)]
pub enum Step {
    /// The category has children; pick again among them.
    Branch { parent: Category, children: Vec<Category> },
    /// No children: products can be fetched.
    Leaf(LeafCategory),
    /// The probe itself failed, so the category's shape is unknown.
    Unavailable { category: Category, error: CatalogError },
}

/// A finished walk: the branches passed through, the leaf, and its products.
#[derive(Debug)]
pub struct Resolution {
    pub path: Vec<Category>,
    pub leaf: LeafCategory,
    pub products: Fetched<Product>,
}

impl Resolution {
    /// Human readable trail, e.g. `Dairy > Cheese`.
    pub fn trail(&self) -> String {
        self.path
            .iter()
            .map(|c| c.name.as_str())
            .chain(std::iter::once(self.leaf.name()))
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Source of category selections (usually the interactive prompt).
pub trait Chooser {
    /// Presents `listing` and returns the raw selection, or `None` to stop.
    fn choose(&mut self, listing: &[Category]) -> Option<String>;

    /// Reports a rejected selection; the same listing is offered again.
    fn rejected(&mut self, error: &NavigateError);
}

/// Numbered display lines, 1-based and in listing order.
pub fn render_listing(listing: &[Category]) -> Vec<String> {
    listing.iter().enumerate().map(|(i, c)| format!("{}. {}", i + 1, c.name)).collect()
}

/// Maps a 1-based index typed by the user onto `listing`.
pub fn select<'a>(listing: &'a [Category], input: &str) -> Result<&'a Category, NavigateError> {
    let invalid = || NavigateError::InvalidSelection {
        input: input.trim().to_string(),
        count: listing.len(),
    };

    let index: usize = input.trim().parse().map_err(|_| invalid())?;
    if index == 0 {
        return Err(invalid());
    }
    listing.get(index - 1).ok_or_else(invalid)
}

/// Walks the catalog's category tree.
pub struct Navigator<'a, C: CatalogApi + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogApi + ?Sized> Navigator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Fetches the top-level listing.
    pub async fn top_level(&self) -> Fetched<Category> {
        self.catalog.fetch_categories(None).await
    }

    /// Probes `category` for children.
    pub async fn descend(&self, category: Category) -> Step {
        match self.catalog.fetch_categories(Some(category.id.as_str())).await {
            Fetched::Items(children) => {
                debug!("{} has {} subcategories", category.name, children.len());
                Step::Branch { parent: category.with_subcategories(true), children }
            }
            Fetched::Empty => Step::Leaf(LeafCategory(category.with_subcategories(false))),
            Fetched::Failed(error) => Step::Unavailable { category, error },
        }
    }

    /// Fetches the products of a resolved leaf.
    pub async fn products(&self, leaf: &LeafCategory) -> Fetched<Product> {
        self.catalog.fetch_products(leaf.id()).await
    }

    /// Lets `chooser` pick from `listing` until a leaf is reached, then
    /// fetches that leaf's products.
    pub async fn resolve(
        &self,
        mut listing: Vec<Category>,
        chooser: &mut impl Chooser,
    ) -> Result<Resolution, NavigateError> {
        let mut path = Vec::new();

        loop {
            if listing.is_empty() {
                return Err(NavigateError::EmptyListing);
            }

            let input = chooser.choose(&listing).ok_or(NavigateError::Cancelled)?;
            let selected = match select(&listing, &input) {
                Ok(category) => category.clone(),
                Err(err) => {
                    chooser.rejected(&err);
                    continue;
                }
            };

            match self.descend(selected).await {
                Step::Branch { parent, children } => {
                    path.push(parent);
                    listing = children;
                }
                Step::Leaf(leaf) => {
                    let products = self.products(&leaf).await;
                    info!("Resolved leaf {} ({} products)", leaf.name(), products.len());
                    return Ok(Resolution { path, leaf, products });
                }
                Step::Unavailable { category, error } => {
                    return Err(NavigateError::Unavailable {
                        category: category.name,
                        source: error,
                    });
                }
            }
        }
    }
}
