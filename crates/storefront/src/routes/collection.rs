//! Collection grid route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use avant_core::{LayoutSize, Product};

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub image: String,
    /// CSS class hook for the grid layout.
    pub size_class: &'static str,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            size_class: size_class(product.size),
        }
    }
}

/// Map a layout hint to its grid CSS class.
const fn size_class(size: LayoutSize) -> &'static str {
    match size {
        LayoutSize::Small => "card-small",
        LayoutSize::Medium => "card-medium",
        LayoutSize::Large => "card-large",
        LayoutSize::Tall => "card-tall",
    }
}

/// Collection query parameters.
#[derive(Debug, Deserialize)]
pub struct CollectionParams {
    /// Exact category filter.
    pub category: Option<String>,
    /// Case-insensitive search query.
    pub q: Option<String>,
}

/// Collection page template.
#[derive(Template, WebTemplate)]
#[template(path = "collection.html")]
pub struct CollectionTemplate {
    pub products: Vec<ProductView>,
    pub categories: Vec<String>,
    pub active_category: String,
    pub query: String,
}

/// Display the collection grid, optionally filtered or searched.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CollectionParams>,
) -> impl IntoResponse {
    let catalog = state.catalog();

    let products: Vec<ProductView> = match (&params.q, &params.category) {
        (Some(q), _) if !q.is_empty() => {
            catalog.search(q).into_iter().map(ProductView::from).collect()
        }
        (_, Some(category)) if !category.is_empty() => catalog
            .in_category(category)
            .into_iter()
            .map(ProductView::from)
            .collect(),
        _ => catalog.products().iter().map(ProductView::from).collect(),
    };

    CollectionTemplate {
        products,
        categories: catalog
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
        active_category: params.category.unwrap_or_default(),
        query: params.q.unwrap_or_default(),
    }
}
