//! Avant CLI - local state inspection and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the persisted cart snapshot
//! avant-cli cart show
//!
//! # Delete the persisted cart snapshot
//! avant-cli cart clear
//!
//! # Print the catalog summary
//! avant-cli catalog list
//! ```
//!
//! # Environment Variables
//!
//! - `AVANT_DATA_DIR` - Directory holding the cart snapshot (default: ./data)
//! - `AVANT_CATALOG` - Catalog JSON path (default: crates/storefront/catalog/products.json)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "avant-cli")]
#[command(author, version, about = "Avant CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or clear the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Catalog tools
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the persisted cart snapshot
    Show,
    /// Delete the persisted cart snapshot
    Clear,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print the catalog summary
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
        },
    }
    Ok(())
}
