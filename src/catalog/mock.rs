//! In-memory catalog used by unit tests.

use crate::catalog::client::CatalogApi;
use crate::catalog::error::CatalogError;
use crate::catalog::models::{Category, Fetched, Product};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock catalog that records every request it serves.
#[derive(Default)]
pub(crate) struct MockCatalog {
    top_level: Vec<Category>,
    children: HashMap<String, Vec<Category>>,
    products: HashMap<String, Vec<Product>>,
    failing_categories: HashSet<String>,
    failing_products: HashSet<String>,
    top_level_fails: bool,
    category_calls: Mutex<Vec<Option<String>>>,
    product_calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub(crate) fn new(top_level: &[(&str, &str)]) -> Self {
        Self { top_level: categories(top_level), ..Self::default() }
    }

    pub(crate) fn failing_top_level() -> Self {
        Self { top_level_fails: true, ..Self::default() }
    }

    pub(crate) fn with_children(mut self, parent: &str, children: &[(&str, &str)]) -> Self {
        self.children.insert(parent.to_string(), categories(children));
        self
    }

    pub(crate) fn with_products(mut self, category: &str, products: Vec<Product>) -> Self {
        self.products.insert(category.to_string(), products);
        self
    }

    pub(crate) fn with_failing_children(mut self, parent: &str) -> Self {
        self.failing_categories.insert(parent.to_string());
        self
    }

    pub(crate) fn with_failing_products(mut self, category: &str) -> Self {
        self.failing_products.insert(category.to_string());
        self
    }

    pub(crate) fn category_calls(&self) -> Vec<Option<String>> {
        self.category_calls.lock().unwrap().clone()
    }

    pub(crate) fn product_calls(&self) -> Vec<String> {
        self.product_calls.lock().unwrap().clone()
    }
}

fn categories(pairs: &[(&str, &str)]) -> Vec<Category> {
    pairs.iter().map(|(id, name)| Category::new(*id, *name)).collect()
}

fn status_error(url: &str) -> CatalogError {
    CatalogError::Status { url: url.to_string(), status: 503 }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn fetch_categories(&self, parent_id: Option<&str>) -> Fetched<Category> {
        self.category_calls.lock().unwrap().push(parent_id.map(str::to_string));

        match parent_id {
            None if self.top_level_fails => Fetched::Failed(status_error("mock://showcases")),
            None => Fetched::from_items(self.top_level.clone()),
            Some(id) if self.failing_categories.contains(id) => {
                Fetched::Failed(status_error("mock://showcases?parent"))
            }
            Some(id) => Fetched::from_items(self.children.get(id).cloned().unwrap_or_default()),
        }
    }

    async fn fetch_products(&self, category_id: &str) -> Fetched<Product> {
        self.product_calls.lock().unwrap().push(category_id.to_string());

        if self.failing_products.contains(category_id) {
            return Fetched::Failed(status_error("mock://products"));
        }
        Fetched::from_items(self.products.get(category_id).cloned().unwrap_or_default())
    }
}
