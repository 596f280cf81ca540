//! Cart snapshot inspection commands.
//!
//! These operate directly on the durable snapshot the storefront writes;
//! they never go through a running server.

use avant_cart::{CART_STORAGE_KEY, CartItem, FileStorage, Storage, StorageError, subtotal};
use avant_core::format_usd;
use thiserror::Error;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The snapshot could not be read or removed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The snapshot exists but is not valid JSON.
    #[error("Corrupt cart snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

fn storage() -> FileStorage {
    let data_dir = std::env::var("AVANT_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    FileStorage::new(data_dir)
}

/// Print the persisted cart snapshot.
///
/// Unlike the storefront (which swallows corruption into an empty cart),
/// the CLI reports a corrupt snapshot - that is exactly what an operator
/// inspecting local state wants to know.
pub fn show() -> Result<(), CartCommandError> {
    let Some(raw) = storage().read(CART_STORAGE_KEY)? else {
        #[allow(clippy::print_stdout)]
        {
            println!("No persisted cart.");
        }
        return Ok(());
    };

    let items: Vec<CartItem> = serde_json::from_str(&raw)?;

    #[allow(clippy::print_stdout)]
    {
        if items.is_empty() {
            println!("Cart is empty.");
            return Ok(());
        }

        println!("{} line(s):", items.len());
        for item in &items {
            println!(
                "  {} x{}  [{}]  {}  ({})",
                item.product.title,
                item.quantity,
                item.selected_size,
                item.product.price,
                format_usd(item.line_total()),
            );
        }
        println!("Subtotal: {}", format_usd(subtotal(&items)));
    }

    Ok(())
}

/// Delete the persisted cart snapshot.
pub fn clear() -> Result<(), CartCommandError> {
    storage().remove(CART_STORAGE_KEY)?;

    #[allow(clippy::print_stdout)]
    {
        println!("Persisted cart cleared.");
    }

    Ok(())
}
