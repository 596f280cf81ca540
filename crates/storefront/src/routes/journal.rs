//! Journal route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::content::JournalEntry;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Journal entry teaser for the index page.
#[derive(Clone)]
pub struct EntryTeaser {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub published: String,
    pub reading_time_minutes: u32,
}

impl From<&JournalEntry> for EntryTeaser {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            slug: entry.slug.clone(),
            title: entry.meta.title.clone(),
            excerpt: entry.meta.excerpt.clone().unwrap_or_default(),
            published: entry.meta.published_at.format("%B %d, %Y").to_string(),
            reading_time_minutes: entry.reading_time_minutes,
        }
    }
}

/// Journal index template.
#[derive(Template, WebTemplate)]
#[template(path = "journal/index.html")]
pub struct JournalIndexTemplate {
    pub entries: Vec<EntryTeaser>,
}

/// Journal entry template.
#[derive(Template, WebTemplate)]
#[template(path = "journal/show.html")]
pub struct JournalEntryTemplate {
    pub title: String,
    pub author: String,
    pub published: String,
    pub reading_time_minutes: u32,
    pub content_html: String,
}

/// Display the journal index (published entries, newest first).
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> JournalIndexTemplate {
    JournalIndexTemplate {
        entries: state
            .content()
            .published_entries()
            .map(EntryTeaser::from)
            .collect(),
    }
}

/// Display a single journal entry.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<JournalEntryTemplate> {
    let entry = state
        .content()
        .get_entry(&slug)
        .ok_or_else(|| AppError::NotFound(format!("journal entry '{slug}'")))?;

    Ok(JournalEntryTemplate {
        title: entry.meta.title.clone(),
        author: entry.meta.author.clone().unwrap_or_default(),
        published: entry.meta.published_at.format("%B %d, %Y").to_string(),
        reading_time_minutes: entry.reading_time_minutes,
        content_html: entry.content_html.clone(),
    })
}
