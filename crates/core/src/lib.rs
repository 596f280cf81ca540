//! Avant Core - Shared types library.
//!
//! This crate provides common types used across all Avant components:
//! - `cart` - Cart and notification state container
//! - `storefront` - Public-facing e-commerce site
//! - `cli` - Command-line tools for inspecting local state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, display prices, and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
