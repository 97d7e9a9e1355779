//! Catalog service access: HTTP client, error causes and data models.

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{CatalogApi, CatalogClient};
pub use error::CatalogError;
pub use models::{Category, Fetched, Product};
