//! Checkout flow: totals, the empty-cart guard, and simulated payment.

#![allow(clippy::unwrap_used)]

use avant_integration_tests::{TestContext, body_string};
use axum::http::StatusCode;

#[tokio::test(start_paused = true)]
async fn empty_cart_shows_the_guard_page() {
    let ctx = TestContext::new();
    let response = ctx.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Cart is empty"));
    assert!(!body.contains("Initiate Transfer"));
}

#[tokio::test(start_paused = true)]
async fn empty_cart_never_reaches_payment() {
    let ctx = TestContext::new();
    let response = ctx.post_form("/checkout/pay", "").await;

    // Redirected back to the cart page; nothing processed, nothing cleared,
    // no notification emitted.
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/cart");
    assert!(ctx.cart.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn checkout_page_shows_manifest_and_totals() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;
    ctx.post_form("/cart/add", "product_id=2").await;
    ctx.post_form("/cart/update", "product_id=2&quantity=2").await;

    let body = body_string(ctx.get("/checkout").await).await;

    assert!(body.contains("Monolith Coat"));
    assert!(body.contains("Void Trousers"));
    // Subtotal $4,100; $25 logistics; 8% tax $328; total $4,453.
    assert!(body.contains("$4,100"));
    assert!(body.contains("$25"));
    assert!(body.contains("$328"));
    assert!(body.contains("$4,453"));
}

#[tokio::test(start_paused = true)]
async fn payment_clears_the_cart_and_confirms() {
    let ctx = TestContext::new();
    ctx.post_form("/cart/add", "product_id=1").await;

    let response = ctx.post_form("/checkout/pay", "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("ACQUIRED"));
    assert!(body.contains("Order Ref: #AV-"));

    assert!(ctx.cart.items().is_empty());
    let messages: Vec<String> = ctx
        .cart
        .notifications()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert!(messages.contains(&"Cart cleared".to_string()));
}
