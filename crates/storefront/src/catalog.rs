//! Static product catalog.
//!
//! The catalog is a JSON document loaded once at startup. Unlike the cart
//! snapshot, a missing or malformed catalog is a deployment error and fails
//! startup loudly - a storefront with no products has nothing to sell.

use std::path::Path;
use std::sync::Arc;

use avant_core::{DisplayPrice, Product, ProductId};
use serde::Deserialize;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A discontinued product shown on the archive page.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveEntry {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: DisplayPrice,
    /// Season the piece shipped in.
    pub year: i32,
}

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    archive: Vec<ArchiveEntry>,
}

/// The loaded product catalog.
///
/// Cheaply cloneable; product data is shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    archive: Arc<Vec<ArchiveEntry>>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file is unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self {
            products: Arc::new(file.products),
            archive: Arc::new(file.archive),
        })
    }

    /// All live products, in authored order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Distinct category labels, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in self.products.iter() {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products in `category` (exact match).
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over title and category.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Discontinued products, in authored order.
    #[must_use]
    pub fn archive(&self) -> &[ArchiveEntry] {
        &self.archive
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "products": [
            {"id": "1", "title": "Monolith Coat", "category": "Outerwear", "price": "$2,400", "image": "/img/1.jpg", "size": "tall"},
            {"id": "2", "title": "Void Trousers", "category": "Basics", "price": "$850", "image": "/img/2.jpg", "size": "medium"},
            {"id": "3", "title": "Cyber Shell", "category": "Outerwear", "price": "$3,200", "image": "/img/3.jpg", "size": "medium"}
        ],
        "archive": [
            {"id": "a1", "title": "Static Parka", "category": "Outerwear", "price": "$2,900", "year": 2023}
        ]
    }"#;

    #[test]
    fn test_load_and_find() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.products().len(), 3);

        let coat = catalog.find(&ProductId::new("1")).unwrap();
        assert_eq!(coat.title, "Monolith Coat");
        assert!(catalog.find(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.categories(), vec!["Outerwear", "Basics"]);
    }

    #[test]
    fn test_in_category() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let outerwear = catalog.in_category("Outerwear");
        assert_eq!(outerwear.len(), 2);
        assert!(catalog.in_category("Footwear").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.search("void").len(), 1);
        assert_eq!(catalog.search("OUTER").len(), 2);
        assert!(catalog.search("sneaker").is_empty());
    }

    #[test]
    fn test_archive_section_is_optional() {
        let catalog = Catalog::from_json(r#"{"products": []}"#).unwrap();
        assert!(catalog.archive().is_empty());

        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.archive().len(), 1);
        assert_eq!(catalog.archive()[0].year, 2023);
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
