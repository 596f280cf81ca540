//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! All handlers delegate to the one shared [`avant_cart::CartStore`]; the
//! store owns the state and this module only shapes it for templates.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use avant_cart::{CartItem, CartStore};
use avant_core::{ProductId, format_usd};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub title: String,
    pub category: String,
    pub selected_size: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

impl From<&CartItem> for CartItemView {
    fn from(line: &CartItem) -> Self {
        Self {
            product_id: line.product.id.to_string(),
            title: line.product.title.clone(),
            category: line.product.category.clone(),
            selected_size: line.selected_size.clone(),
            quantity: line.quantity,
            price: line.product.price.to_string(),
            line_price: format_usd(line.line_total()),
            image: line.product.image.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub line_count: usize,
}

impl CartView {
    /// Snapshot the store into display data.
    #[must_use]
    pub fn from_store(store: &CartStore) -> Self {
        let items = store.items();
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            subtotal: format_usd(avant_cart::subtotal(&items)),
            line_count: items.len(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub size: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Cart sidebar fragment template (for HTMX).
///
/// Renders an empty shell while the sidebar is closed; adding to the cart
/// opens it on the next poll.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_sidebar.html")]
pub struct CartSidebarTemplate {
    pub is_open: bool,
    pub cart: CartView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartShowTemplate {
        cart: CartView::from_store(state.cart()),
    }
}

/// Add item to cart (HTMX).
///
/// Resolves the product against the catalog (the store never validates
/// products itself), merges or appends the line, and opens the sidebar.
/// Returns an HTMX trigger to update the cart count badge.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .find(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product '{product_id}'")))?
        .clone();

    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", product_id.as_str())]),
    );

    state.cart().add_to_cart(&product, form.size.as_deref());

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: state.cart().line_count(),
        },
    )
        .into_response())
}

/// Update cart item quantity (HTMX).
///
/// A quantity below 1 removes the product outright; either way the refreshed
/// cart items fragment is returned.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    let product_id = ProductId::new(form.product_id);
    state.cart().update_quantity(&product_id, form.quantity);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from_store(state.cart()),
        },
    )
}

/// Remove item from cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let product_id = ProductId::new(form.product_id);
    state.cart().remove_from_cart(&product_id);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from_store(state.cart()),
        },
    )
}

/// Empty the cart (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    state.cart().clear_cart();

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from_store(state.cart()),
        },
    )
}

/// Get cart count badge (HTMX).
///
/// The badge counts distinct lines, not summed quantities.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().line_count(),
    }
}

/// Cart sidebar fragment (HTMX).
#[instrument(skip(state))]
pub async fn sidebar(State(state): State<AppState>) -> impl IntoResponse {
    CartSidebarTemplate {
        is_open: state.cart().is_cart_open(),
        cart: CartView::from_store(state.cart()),
    }
}

/// Open the cart sidebar.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> StatusCode {
    state.cart().set_cart_open(true);
    StatusCode::NO_CONTENT
}

/// Close the cart sidebar.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> StatusCode {
    state.cart().set_cart_open(false);
    StatusCode::NO_CONTENT
}
