//! The cart store: one state container for cart lines, the sidebar flag,
//! and transient notifications.
//!
//! Construct exactly one [`CartStore`] at application start and hand clones
//! to every consumer; all clones share the same state. Mutations run under a
//! single mutex and mirror the cart lines to durable storage before
//! returning, so a snapshot read after any operation observes the latest
//! write.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use avant_core::{NotificationId, Product, ProductId};
use rust_decimal::Decimal;

use crate::item::{CartItem, DEFAULT_SELECTED_SIZE, subtotal};
use crate::notification::{NOTIFICATION_TTL, Notification, NotificationKind};
use crate::storage::Storage;

/// Durable-storage key for the cart snapshot.
pub const CART_STORAGE_KEY: &str = "cart";

#[derive(Default)]
struct CartState {
    items: Vec<CartItem>,
    is_cart_open: bool,
    notifications: Vec<Notification>,
}

struct Inner {
    state: Mutex<CartState>,
    storage: Arc<dyn Storage>,
}

/// The cart and notification state container.
///
/// Cheaply cloneable; clones share one state instance. See the crate docs
/// for the persistence and concurrency contract.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

impl CartStore {
    /// Create a store backed by `storage`, adopting any previously persisted
    /// cart snapshot.
    ///
    /// A missing, unreadable, or corrupt snapshot yields an empty cart - a
    /// stale cart is never worth failing startup over. The sidebar starts
    /// closed and the notification queue empty regardless of what was
    /// persisted.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let items = match storage.read(CART_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding corrupt cart snapshot: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read cart snapshot: {e}");
                Vec::new()
            }
        };

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(CartState {
                    items,
                    ..CartState::default()
                }),
                storage,
            }),
        }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Add one unit of `product` to the cart.
    ///
    /// If a line with the same (product id, size) key exists its quantity is
    /// incremented in place; otherwise a new line is appended. `None` size
    /// means [`DEFAULT_SELECTED_SIZE`]. Always opens the cart sidebar and
    /// emits a success notification.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime (the notification expiry
    /// timer is spawned on it).
    pub fn add_to_cart(&self, product: &Product, size: Option<&str>) {
        let size = size.unwrap_or(DEFAULT_SELECTED_SIZE);
        let message = {
            let mut state = self.lock();
            let message = if let Some(line) = state
                .items
                .iter_mut()
                .find(|line| line.matches(&product.id, size))
            {
                line.quantity += 1;
                format!("Increased quantity of {}", product.title)
            } else {
                state.items.push(CartItem::new(product.clone(), size));
                format!("Added {} to cart", product.title)
            };
            state.is_cart_open = true;
            self.persist(&state.items);
            message
        };

        self.add_notification(&message, NotificationKind::Success);
    }

    /// Remove every line whose product id is `product_id`.
    ///
    /// Removal matches on product id alone, NOT on the (id, size) line key:
    /// all sizes of the product go at once. This mirrors the shipped
    /// behavior; whether per-line removal was intended is an open product
    /// question, so it is pinned by tests rather than "fixed". The info
    /// notification is emitted even when no line matched.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        {
            let mut state = self.lock();
            state.items.retain(|line| line.product.id != *product_id);
            self.persist(&state.items);
        }

        self.add_notification("Item removed from cart", NotificationKind::Info);
    }

    /// Set the quantity of every line whose product id is `product_id`.
    ///
    /// A quantity below 1 delegates to [`Self::remove_from_cart`] - the cart
    /// never holds a line with quantity zero. Like removal, this matches on
    /// product id alone (all sizes get the same quantity); pinned by tests as
    /// an open product question.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime (via `remove_from_cart`).
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_from_cart(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let mut state = self.lock();
        for line in state
            .items
            .iter_mut()
            .filter(|line| line.product.id == *product_id)
        {
            line.quantity = quantity;
        }
        self.persist(&state.items);
    }

    /// Empty the cart and emit an info notification.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn clear_cart(&self) {
        {
            let mut state = self.lock();
            state.items.clear();
            self.persist(&state.items);
        }

        self.add_notification("Cart cleared", NotificationKind::Info);
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Append a notification and schedule its automatic removal after
    /// [`NOTIFICATION_TTL`].
    ///
    /// Returns the generated id so callers can dismiss it early. The expiry
    /// task is never cancelled; if the notification was already dismissed the
    /// delayed removal is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn add_notification(&self, message: &str, kind: NotificationKind) -> NotificationId {
        let notification = Notification::new(message, kind);
        let id = notification.id.clone();
        self.lock().notifications.push(notification);

        let store = self.clone();
        let expiring = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            store.remove_notification(&expiring);
        });

        id
    }

    /// Remove the notification with `id`, if present. Idempotent.
    pub fn remove_notification(&self, id: &NotificationId) {
        self.lock().notifications.retain(|n| n.id != *id);
    }

    // =========================================================================
    // Sidebar Flag
    // =========================================================================

    /// Show or hide the cart sidebar. No side effects.
    pub fn set_cart_open(&self, open: bool) {
        self.lock().is_cart_open = open;
    }

    /// Whether the cart sidebar is open.
    #[must_use]
    pub fn is_cart_open(&self) -> bool {
        self.lock().is_cart_open
    }

    // =========================================================================
    // Snapshots & Derived Values
    // =========================================================================

    /// Snapshot of the cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().items.clone()
    }

    /// Snapshot of the active notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    /// Number of distinct lines (not summed quantities - the cart badge
    /// counts lines).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lock().items.len()
    }

    /// Sum over lines of unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        subtotal(&self.lock().items)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mirror the full line snapshot to durable storage.
    ///
    /// Called under the state lock so the snapshot on disk always reflects
    /// the mutation that just ran. Write failures are logged and swallowed;
    /// the in-memory cart stays authoritative for the rest of the session.
    fn persist(&self, items: &[CartItem]) {
        match serde_json::to_string(items) {
            Ok(snapshot) => {
                if let Err(e) = self.inner.storage.write(CART_STORAGE_KEY, &snapshot) {
                    tracing::warn!("Failed to persist cart snapshot: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize cart snapshot: {e}"),
        }
    }
}
