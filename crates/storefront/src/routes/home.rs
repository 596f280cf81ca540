//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::collection::ProductView;
use crate::state::AppState;

/// A journal teaser shown below the hero.
#[derive(Clone)]
pub struct JournalTeaser {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured products for the front grid.
    pub featured: Vec<ProductView>,
    /// Latest journal entries.
    pub journal_teasers: Vec<JournalTeaser>,
}

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// Number of journal teasers on the home page.
const TEASER_COUNT: usize = 2;

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = state
        .catalog()
        .products()
        .iter()
        .take(FEATURED_COUNT)
        .map(ProductView::from)
        .collect();

    let journal_teasers = state
        .content()
        .published_entries()
        .take(TEASER_COUNT)
        .map(|entry| JournalTeaser {
            slug: entry.slug.clone(),
            title: entry.meta.title.clone(),
            excerpt: entry.meta.excerpt.clone().unwrap_or_default(),
        })
        .collect();

    HomeTemplate {
        featured,
        journal_teasers,
    }
}
