//! Catalog inspection commands.

use avant_core::Product;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The subset of the catalog document the CLI cares about.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Print the catalog summary.
pub fn list() -> Result<(), CatalogCommandError> {
    let path = std::env::var("AVANT_CATALOG")
        .unwrap_or_else(|_| "crates/storefront/catalog/products.json".to_string());

    let raw = std::fs::read_to_string(path)?;
    let document: CatalogDocument = serde_json::from_str(&raw)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{} product(s):", document.products.len());
        for product in &document.products {
            println!(
                "  {}  {}  [{}]  {}",
                product.id, product.title, product.category, product.price,
            );
        }
    }

    Ok(())
}
