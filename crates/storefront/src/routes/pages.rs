//! Markdown-backed page route handlers (about, studio).

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Static page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/show.html")]
pub struct PageTemplate {
    pub title: String,
    pub content_html: String,
}

/// Render the page with `slug`, or 404 when the content file is absent.
fn render(state: &AppState, slug: &str) -> Result<PageTemplate> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page '{slug}'")))?;

    Ok(PageTemplate {
        title: page.meta.title.clone(),
        content_html: page.content_html.clone(),
    })
}

/// Display the about page.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<PageTemplate> {
    render(&state, "about")
}

/// Display the studio page.
#[instrument(skip(state))]
pub async fn studio(State(state): State<AppState>) -> Result<PageTemplate> {
    render(&state, "studio")
}
