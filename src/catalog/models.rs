//! Data models for catalog categories and products.

use crate::catalog::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};

/// A category (showcase) as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque catalog identifier, unique within its parent scope
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    /// Display label
    pub name: String,
    /// True once a subcategory probe came back non-empty
    #[serde(skip)]
    pub has_subcategories: bool,
}

impl Category {
    /// Creates a category that has not been probed yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), has_subcategories: false }
    }

    /// Returns a copy marked with the outcome of a subcategory probe.
    pub fn with_subcategories(mut self, has_subcategories: bool) -> Self {
        self.has_subcategories = has_subcategories;
        self
    }
}

/// A product listed inside a leaf category.
///
/// Field order is the export order: `name`, `price`, `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Price exactly as the catalog sent it
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    /// Absolute link to the product page
    pub url: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), price: price.into(), url: url.into() }
    }
}

/// Accepts a JSON string or number and keeps its text untouched.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Outcome of a single catalog fetch.
///
/// Keeps "the request worked but returned nothing" apart from
/// "the request failed".
#[derive(Debug)]
pub enum Fetched<T> {
    /// At least one record came back
    Items(Vec<T>),
    /// The request succeeded with an empty list
    Empty,
    /// Transport, status or decode failure
    Failed(CatalogError),
}

impl<T> Fetched<T> {
    /// Wraps decoded records, mapping an empty list to `Empty`.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Fetched::Empty
        } else {
            Fetched::Items(items)
        }
    }

    /// Collapses to a plain list; failures become an empty list.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Fetched::Items(items) => items,
            Fetched::Empty | Fetched::Failed(_) => Vec::new(),
        }
    }

    /// Number of records (0 for `Empty` and `Failed`).
    pub fn len(&self) -> usize {
        match self {
            Fetched::Items(items) => items.len(),
            Fetched::Empty | Fetched::Failed(_) => 0,
        }
    }

    /// Returns true if no records came back, whatever the reason.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }

    /// Returns the failure cause, if any.
    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            Fetched::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<Vec<T>, CatalogError>> for Fetched<T> {
    fn from(result: Result<Vec<T>, CatalogError>) -> Self {
        match result {
            Ok(items) => Fetched::from_items(items),
            Err(err) => Fetched::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_decode_ignores_unknown_fields() {
        let json = r#"[{"id":"1","name":"Fruits","icon":"f.png","order":3}]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "1");
        assert_eq!(categories[0].name, "Fruits");
        assert!(!categories[0].has_subcategories);
    }

    #[test]
    fn test_category_numeric_id() {
        let json = r#"{"id":42,"name":"Dairy"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "42");
    }

    #[test]
    fn test_category_wire_flag_is_ignored() {
        let json = r#"{"id":"1","name":"Fruits","has_subcategories":true}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(!category.has_subcategories);
    }

    #[test]
    fn test_category_missing_name_fails() {
        let result = serde_json::from_str::<Category>(r#"{"id":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_subcategories() {
        let category = Category::new("1", "Fruits").with_subcategories(true);
        assert!(category.has_subcategories);
    }

    #[test]
    fn test_product_price_kept_verbatim() {
        let json = r#"[
            {"name":"Milk","price":"99,90 ₽","url":"http://x/milk"},
            {"name":"Eggs","price":120.5,"url":"http://x/eggs","stock":4}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products[0].price, "99,90 ₽");
        assert_eq!(products[1].price, "120.5");
    }

    #[test]
    fn test_product_missing_url_fails() {
        let result = serde_json::from_str::<Product>(r#"{"name":"Milk","price":"99"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_product_serialize_field_order() {
        let product = Product::new("Milk", "99", "http://x/milk");
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"name":"Milk","price":"99","url":"http://x/milk"}"#);
    }

    #[test]
    fn test_fetched_from_items() {
        let fetched = Fetched::from_items(vec![1, 2]);
        assert!(matches!(fetched, Fetched::Items(ref v) if v.len() == 2));

        let fetched: Fetched<u8> = Fetched::from_items(Vec::new());
        assert!(matches!(fetched, Fetched::Empty));
        assert!(!fetched.is_failed());
    }

    #[test]
    fn test_fetched_failed_collapses_to_empty() {
        let fetched: Fetched<Product> = Fetched::Failed(CatalogError::Status {
            url: "http://x/products".to_string(),
            status: 500,
        });

        assert!(fetched.is_failed());
        assert!(fetched.is_empty());
        assert!(fetched.error().is_some());
        assert!(fetched.into_items().is_empty());
    }

    #[test]
    fn test_fetched_from_result() {
        let ok: Result<Vec<u8>, CatalogError> = Ok(vec![7]);
        assert_eq!(Fetched::from(ok).len(), 1);

        let err: Result<Vec<u8>, CatalogError> =
            Err(CatalogError::Status { url: "u".to_string(), status: 404 });
        let err = Fetched::from(err);
        assert!(err.is_failed());
    }
}
