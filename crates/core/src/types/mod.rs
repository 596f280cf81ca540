//! Core types for the Avant storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::{DisplayPrice, format_usd};
pub use product::{LayoutSize, Product};
