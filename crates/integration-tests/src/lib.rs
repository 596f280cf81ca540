//! Integration tests for Avant.
//!
//! The storefront router is driven in process via `tower::ServiceExt` -
//! no network, no spawned server. Each [`TestContext`] owns a fresh
//! application over in-memory storage; share the storage between contexts
//! to exercise persistence across "restarts".
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p avant-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test support code

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use avant_cart::{CartStore, MemoryStorage, Storage};
use avant_storefront::catalog::Catalog;
use avant_storefront::config::StorefrontConfig;
use avant_storefront::content::SiteContent;
use avant_storefront::routes;
use avant_storefront::state::AppState;

/// A small fixed catalog mirroring the live data shapes.
pub const TEST_CATALOG: &str = r#"{
    "products": [
        {"id": "1", "title": "Monolith Coat", "category": "Outerwear", "price": "$2,400", "image": "/img/1.jpg", "size": "tall"},
        {"id": "2", "title": "Void Trousers", "category": "Basics", "price": "$850", "image": "/img/2.jpg", "size": "medium"},
        {"id": "3", "title": "Glass Veil", "category": "Accessories", "price": "$400", "image": "/img/3.jpg", "size": "small"}
    ],
    "archive": [
        {"id": "a1", "title": "Eclipse Parka", "category": "Outerwear", "price": "$2,900", "year": 2023}
    ]
}"#;

/// An assembled application plus handles to its state.
pub struct TestContext {
    pub app: Router,
    pub cart: CartStore,
}

impl TestContext {
    /// Fresh application over fresh in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Fresh application over `storage`, adopting whatever cart snapshot it
    /// holds - the storefront equivalent of a process restart.
    #[must_use]
    pub fn with_storage(storage: Arc<MemoryStorage>) -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost".to_string(),
            data_dir: PathBuf::from("unused"),
            content_dir: PathBuf::from("unused"),
            catalog_path: PathBuf::from("unused"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_traces_sample_rate: 0.0,
        };

        let cart = CartStore::new(storage as Arc<dyn Storage>);
        let catalog = Catalog::from_json(TEST_CATALOG).unwrap();
        let state = AppState::new(config, cart.clone(), catalog, SiteContent::empty());

        Self {
            app: routes::app(state),
            cart,
        }
    }

    /// GET `uri` and return the response.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST `uri` with a urlencoded form body and return the response.
    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect a response body into a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
