//! Application state shared across handlers.

use std::sync::Arc;

use avant_cart::CartStore;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::content::SiteContent;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the one
/// cart store instance, the catalog, the loaded content, and configuration.
/// The cart store is constructed exactly once (in `main`) and injected here;
/// handlers can only reach it through state extraction, so a route wired
/// without state fails at router construction, not silently at runtime.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartStore,
    catalog: Catalog,
    content: SiteContent,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        cart: CartStore,
        catalog: Catalog,
        content: SiteContent,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                catalog,
                content,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the loaded site content.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.inner.content
    }
}
