//! catalog-crawler - Interactive product catalog browser and exporter
//!
//! Lists a catalog's categories, walks subcategories down to a leaf and
//! exports the leaf's products as JSON or CSV.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod export;
pub mod logging;
pub mod navigator;

pub use catalog::{CatalogApi, CatalogClient, CatalogError, Category, Fetched, Product};
pub use config::Config;
pub use export::{ExportError, ExportFormat, Exporter};
pub use navigator::{NavigateError, Navigator};
