//! Archive route handler: discontinued products by season.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::ArchiveEntry;
use crate::filters;
use crate::state::AppState;

/// Archived product display data.
#[derive(Clone)]
pub struct ArchiveEntryView {
    pub title: String,
    pub category: String,
    pub price: String,
    pub year: i32,
}

impl From<&ArchiveEntry> for ArchiveEntryView {
    fn from(entry: &ArchiveEntry) -> Self {
        Self {
            title: entry.title.clone(),
            category: entry.category.clone(),
            price: entry.price.to_string(),
            year: entry.year,
        }
    }
}

/// Archive page template.
#[derive(Template, WebTemplate)]
#[template(path = "archive.html")]
pub struct ArchiveTemplate {
    pub entries: Vec<ArchiveEntryView>,
}

/// Display the archive of discontinued products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    ArchiveTemplate {
        entries: state
            .catalog()
            .archive()
            .iter()
            .map(ArchiveEntryView::from)
            .collect(),
    }
}
