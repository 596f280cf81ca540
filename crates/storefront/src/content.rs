//! Content management for markdown-based pages and journal entries.
//!
//! This module loads markdown files from the content directory at startup,
//! parses frontmatter metadata, and renders markdown to HTML. Pages back the
//! about and studio routes; journal entries back the editorial index.

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Content loading errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Metadata for static pages (about, studio).
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Metadata for journal entries.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalMeta {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub draft: bool,
}

/// A rendered page with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// A rendered journal entry with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub slug: String,
    pub meta: JournalMeta,
    pub content_html: String,
    pub reading_time_minutes: u32,
}

/// Content store that holds all loaded content in memory.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pages: Arc<HashMap<String, Page>>,
    journal: Arc<Vec<JournalEntry>>,
}

impl SiteContent {
    /// Load all content from the filesystem.
    ///
    /// Missing subdirectories log and yield empty content; a storefront
    /// without a journal still serves products.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing content directory cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = Self::load_pages(&content_dir.join("pages"))?;
        let journal = Self::load_journal(&content_dir.join("journal"))?;

        Ok(Self {
            pages: Arc::new(pages),
            journal: Arc::new(journal),
        })
    }

    /// Content store with no pages and no journal entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pages: Arc::new(HashMap::new()),
            journal: Arc::new(Vec::new()),
        }
    }

    /// Load all pages from the pages directory.
    fn load_pages(dir: &Path) -> Result<HashMap<String, Page>, ContentError> {
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(pages);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!("Loaded page: {}", page.slug);
                        pages.insert(page.slug.clone(), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(pages)
    }

    /// Load a single page from a markdown file.
    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<PageMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(Page {
            slug,
            meta,
            content_html,
        })
    }

    /// Load all journal entries from the journal directory.
    fn load_journal(dir: &Path) -> Result<Vec<JournalEntry>, ContentError> {
        let mut entries_out = Vec::new();

        if !dir.exists() {
            tracing::info!("Journal directory does not exist yet: {:?}", dir);
            return Ok(entries_out);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_entry(&path) {
                    Ok(journal_entry) => {
                        tracing::info!("Loaded journal entry: {}", journal_entry.slug);
                        entries_out.push(journal_entry);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load journal entry {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort entries by published date (newest first)
        entries_out.sort_by(|a, b| b.meta.published_at.cmp(&a.meta.published_at));

        Ok(entries_out)
    }

    /// Load a single journal entry from a markdown file.
    fn load_entry(path: &Path) -> Result<JournalEntry, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        // Extract slug from filename (e.g., "2026-01-15-process.md" -> "process")
        let filename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?;

        // Remove date prefix if present (YYYY-MM-DD-)
        let slug = if filename.len() > 11 && filename.chars().nth(4) == Some('-') {
            filename.get(11..).unwrap_or(filename).to_string()
        } else {
            filename.to_string()
        };

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<JournalMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        // Estimate reading time (average 200 words per minute)
        let word_count = parsed.content.split_whitespace().count();
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let reading_time_minutes = ((word_count as f32) / 200.0).ceil() as u32;

        Ok(JournalEntry {
            slug,
            meta,
            content_html,
            reading_time_minutes: reading_time_minutes.max(1),
        })
    }

    /// Get a page by slug.
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Get a journal entry by slug.
    #[must_use]
    pub fn get_entry(&self, slug: &str) -> Option<&JournalEntry> {
        self.journal.iter().find(|e| e.slug == slug)
    }

    /// Get all published journal entries, newest first (excludes drafts).
    pub fn published_entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.journal.iter().filter(|e| !e.meta.draft)
    }
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Render options
    options.render.r#unsafe = true; // Allow raw HTML in markdown

    markdown_to_html(content, &options)
}
