//! Avant Cart - the cart and notification state container.
//!
//! This crate owns the authoritative client state of the storefront: the
//! ordered list of cart lines, the cart-sidebar visibility flag, and the
//! transient notification queue. All mutation flows through [`CartStore`];
//! no other component touches the state directly.
//!
//! # Persistence
//!
//! Cart lines are mirrored to durable storage on every mutation as a full
//! JSON snapshot under a fixed key (see [`store::CART_STORAGE_KEY`]). A
//! missing or corrupt snapshot yields an empty cart at startup - never an
//! error. The sidebar flag and notifications are never persisted.
//!
//! # Concurrency
//!
//! Operations serialize through a single mutex, so no operation observes a
//! partially-applied mutation from another. The store is cheaply cloneable
//! and shares one state instance across all clones.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod item;
pub mod notification;
pub mod storage;
pub mod store;

pub use item::{CartItem, DEFAULT_SELECTED_SIZE, subtotal};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CART_STORAGE_KEY, CartStore};
