//! Cart flow over HTTP: add, merge, update, remove, clear, persistence.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use avant_cart::{MemoryStorage, NOTIFICATION_TTL};
use avant_core::ProductId;
use avant_integration_tests::{TestContext, body_string};
use axum::http::StatusCode;

#[tokio::test(start_paused = true)]
async fn health_is_ok() {
    let ctx = TestContext::new();
    let response = ctx.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test(start_paused = true)]
async fn add_to_cart_returns_count_fragment_and_opens_sidebar() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/cart/add", "product_id=1&size=small").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let body = body_string(response).await;
    assert!(body.contains(">1</span>"));

    assert_eq!(ctx.cart.line_count(), 1);
    assert!(ctx.cart.is_cart_open());
}

#[tokio::test(start_paused = true)]
async fn add_unknown_product_is_a_404() {
    let ctx = TestContext::new();
    let response = ctx.post_form("/cart/add", "product_id=99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(ctx.cart.items().is_empty());
}

#[tokio::test(start_paused = true)]
async fn same_product_and_size_merge_into_one_line() {
    let ctx = TestContext::new();

    ctx.post_form("/cart/add", "product_id=1").await;
    ctx.post_form("/cart/add", "product_id=1").await;

    let items = ctx.cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    // Omitted size falls back to medium.
    assert_eq!(items[0].selected_size, "medium");
}

#[tokio::test(start_paused = true)]
async fn distinct_sizes_are_distinct_lines() {
    let ctx = TestContext::new();

    ctx.post_form("/cart/add", "product_id=1&size=small").await;
    ctx.post_form("/cart/add", "product_id=1&size=large").await;

    assert_eq!(ctx.cart.line_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn update_quantity_to_zero_removes_the_line() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;

    let response = ctx
        .post_form("/cart/update", "product_id=1&quantity=0")
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty."));
    assert!(ctx.cart.items().is_empty());
}

#[tokio::test(start_paused = true)]
async fn remove_drops_every_size_of_the_product() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1&size=small").await;
    ctx.post_form("/cart/add", "product_id=1&size=large").await;
    ctx.post_form("/cart/add", "product_id=2").await;

    ctx.post_form("/cart/remove", "product_id=1").await;

    let items = ctx.cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product.id, ProductId::new("2"));
}

#[tokio::test(start_paused = true)]
async fn clear_empties_the_cart() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;
    ctx.post_form("/cart/add", "product_id=2").await;

    let response = ctx.post_form("/cart/clear", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(ctx.cart.items().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cart_page_shows_lines_and_subtotal() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;
    ctx.post_form("/cart/add", "product_id=2").await;
    ctx.post_form("/cart/update", "product_id=2&quantity=2").await;

    let body = body_string(ctx.get("/cart").await).await;
    assert!(body.contains("Monolith Coat"));
    assert!(body.contains("Void Trousers"));
    // $2,400 + $850 x 2
    assert!(body.contains("$4,100"));
}

#[tokio::test(start_paused = true)]
async fn count_badge_counts_lines_not_quantities() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;
    ctx.post_form("/cart/add", "product_id=1").await;
    ctx.post_form("/cart/add", "product_id=2").await;

    let body = body_string(ctx.get("/cart/count").await).await;
    assert!(body.contains(">2</span>"));
}

#[tokio::test(start_paused = true)]
async fn sidebar_open_and_close_routes() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/cart/open", "").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(ctx.cart.is_cart_open());

    let response = ctx.post_form("/cart/close", "").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!ctx.cart.is_cart_open());
}

#[tokio::test(start_paused = true)]
async fn sidebar_fragment_reflects_the_open_flag() {
    let ctx = TestContext::new();

    // Closed: the fragment is an empty shell.
    let body = body_string(ctx.get("/cart/sidebar").await).await;
    assert!(!body.contains("cart-sidebar-open"));

    // Adding opens the sidebar and surfaces the line.
    ctx.post_form("/cart/add", "product_id=1").await;
    let body = body_string(ctx.get("/cart/sidebar").await).await;
    assert!(body.contains("cart-sidebar-open"));
    assert!(body.contains("Monolith Coat"));

    // Closing empties it again without touching the items.
    ctx.post_form("/cart/close", "").await;
    let body = body_string(ctx.get("/cart/sidebar").await).await;
    assert!(!body.contains("Monolith Coat"));
    assert_eq!(ctx.cart.line_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn cart_survives_a_restart() {
    let storage = Arc::new(MemoryStorage::new());

    let ctx = TestContext::with_storage(Arc::clone(&storage));
    ctx.post_form("/cart/add", "product_id=1&size=small").await;
    ctx.post_form("/cart/add", "product_id=2").await;
    let before = ctx.cart.items();

    // A new context over the same storage is a process restart: the lines
    // come back in order, the sidebar flag does not.
    let restarted = TestContext::with_storage(storage);
    assert_eq!(restarted.cart.items(), before);
    assert!(!restarted.cart.is_cart_open());
}

#[tokio::test(start_paused = true)]
async fn notifications_surface_expire_and_dismiss() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;

    let body = body_string(ctx.get("/notifications").await).await;
    assert!(body.contains("Added Monolith Coat to cart"));
    assert!(body.contains("notification-success"));

    // Auto-expiry clears the tray.
    tokio::time::sleep(NOTIFICATION_TTL + Duration::from_millis(5)).await;
    let body = body_string(ctx.get("/notifications").await).await;
    assert!(!body.contains("Added Monolith Coat to cart"));

    // Dismissing an id that already expired is a quiet no-op.
    let id = ctx
        .cart
        .add_notification("Cart cleared", avant_cart::NotificationKind::Info);
    tokio::time::sleep(NOTIFICATION_TTL + Duration::from_millis(5)).await;
    let response = ctx
        .post_form("/notifications/dismiss", &format!("id={id}"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn dismiss_removes_one_notification() {
    let ctx = TestContext::new();
    let id = ctx
        .cart
        .add_notification("Item removed from cart", avant_cart::NotificationKind::Info);

    let response = ctx
        .post_form("/notifications/dismiss", &format!("id={id}"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(ctx.cart.notifications().is_empty());

    let body = body_string(response).await;
    assert!(!body.contains("Item removed from cart"));
}
