//! Checkout route handlers.
//!
//! Checkout is simulated: no payment processor is wired up. The pay handler
//! guards the empty cart, waits a fixed processing delay, stamps an order
//! reference, and clears the cart. Totals follow the storefront's flat
//! shipping fee and 8% tax.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::instrument;

use avant_core::format_usd;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Flat shipping fee in dollars.
const SHIPPING_FLAT: i64 = 25;

/// Simulated payment processing delay.
const PROCESSING_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Order totals display data.
#[derive(Clone)]
pub struct TotalsView {
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

/// Compute totals from a subtotal: flat shipping plus 8% tax.
fn totals(subtotal: Decimal) -> TotalsView {
    let shipping = Decimal::from(SHIPPING_FLAT);
    // 8% tax, rounded to cents
    let tax = (subtotal * Decimal::new(8, 2)).round_dp(2);
    let total = subtotal + shipping + tax;

    TotalsView {
        subtotal: format_usd(subtotal),
        shipping: format_usd(shipping),
        tax: format_usd(tax),
        total: format_usd(total),
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub totals: TotalsView,
}

/// Empty-cart guard page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct CheckoutEmptyTemplate {}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct CheckoutCompleteTemplate {
    pub order_ref: String,
    pub total: String,
}

/// Display the checkout page, or the guard page when the cart is empty.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Response {
    let cart = CartView::from_store(state.cart());
    if cart.items.is_empty() {
        return CheckoutEmptyTemplate {}.into_response();
    }

    let totals = totals(state.cart().subtotal());
    CheckoutTemplate { cart, totals }.into_response()
}

/// Simulated payment.
///
/// An empty cart never reaches processing - it redirects back to the cart
/// page. Otherwise the handler waits out the fixed processing delay, stamps
/// an order reference, clears the cart (which notifies the user), and
/// renders the confirmation.
#[instrument(skip(state))]
pub async fn pay(State(state): State<AppState>) -> Response {
    if state.cart().items().is_empty() {
        return Redirect::to("/cart").into_response();
    }

    let total = totals(state.cart().subtotal()).total;
    add_breadcrumb("checkout", "Payment initiated", None);

    tokio::time::sleep(PROCESSING_DELAY).await;

    let order_ref = format!("AV-{:04}", rand::rng().random_range(0..10_000));
    state.cart().clear_cart();

    tracing::info!(order_ref = %order_ref, "Simulated payment completed");

    CheckoutCompleteTemplate { order_ref, total }.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_math() {
        // Subtotal $4,100: shipping $25 flat, tax 8% = $328, total $4,453.
        let view = totals(Decimal::from(4100));
        assert_eq!(view.subtotal, "$4,100");
        assert_eq!(view.shipping, "$25");
        assert_eq!(view.tax, "$328");
        assert_eq!(view.total, "$4,453");
    }

    #[test]
    fn test_totals_round_tax_to_cents() {
        // $1,111 * 8% = $88.88
        let view = totals(Decimal::from(1111));
        assert_eq!(view.tax, "$88.88");
        assert_eq!(view.total, "$1,224.88");
    }

    #[test]
    fn test_totals_empty_subtotal() {
        let view = totals(Decimal::ZERO);
        assert_eq!(view.subtotal, "$0");
        assert_eq!(view.total, "$25");
    }
}
