//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Pages
//! GET  /collection             - Product grid (?category= filter, ?q= search)
//! GET  /journal                - Journal index
//! GET  /journal/:slug          - Journal entry
//! GET  /studio                 - Studio page (markdown)
//! GET  /about                  - About page (markdown)
//! GET  /archive                - Archived products
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count fragment, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Clear cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /cart/sidebar           - Cart sidebar (fragment, empty while closed)
//! POST /cart/open              - Open the cart sidebar
//! POST /cart/close             - Close the cart sidebar
//!
//! # Notifications (HTMX fragments)
//! GET  /notifications          - Active notifications (polled)
//! POST /notifications/dismiss  - Dismiss one notification
//!
//! # Checkout
//! GET  /checkout               - Checkout page (guard page when cart empty)
//! POST /checkout/pay           - Simulated payment
//! ```

pub mod archive;
pub mod cart;
pub mod checkout;
pub mod collection;
pub mod home;
pub mod journal;
pub mod notifications;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/sidebar", get(cart::sidebar))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create the notification routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::index))
        .route("/dismiss", post(notifications::dismiss))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Assemble the full application: routes, static files, and the middleware
/// stack, bound to `state`.
///
/// Used by `main` and by the integration tests, which drive the router in
/// process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Collection grid
        .route("/collection", get(collection::index))
        // Journal
        .route("/journal", get(journal::index))
        .route("/journal/{slug}", get(journal::show))
        // Markdown pages
        .route("/studio", get(pages::studio))
        .route("/about", get(pages::about))
        // Archive
        .route("/archive", get(archive::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Notifications
        .nest("/notifications", notification_routes())
        // Checkout
        .route("/checkout", get(checkout::show))
        .route("/checkout/pay", post(checkout::pay))
}
