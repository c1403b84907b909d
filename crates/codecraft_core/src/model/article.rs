//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical article record stored under the posts key.
//! - Provide draft validation and derived text projections.
//!
//! # Invariants
//! - `id` is immutable once assigned.
//! - `date` carries a calendar date only, serialized as `YYYY-MM-DD`.
//! - Tag order is preserved as authored.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

const WORDS_PER_MINUTE: usize = 200;

/// Validation failure for article drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "article title must not be empty"),
            Self::EmptyContent => write!(f, "article content must not be empty"),
        }
    }
}

impl Error for ArticleValidationError {}

/// Canonical article record.
///
/// Serialized field names match the durable JSON layout exactly; existing
/// installations must keep deserializing after upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable time-derived identifier (`post-<epoch_ms>`).
    pub id: String,
    pub title: String,
    /// Display name of the author at publish time.
    pub author: String,
    #[serde(rename = "authorId")]
    pub author_id: i64,
    /// Publish date, calendar date only.
    pub date: NaiveDate,
    /// Ordered tag labels as authored.
    pub tags: Vec<String>,
    /// HTML body content.
    pub content: String,
}

/// Caller-supplied fields for a new article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: String,
    pub author_id: i64,
}

impl ArticleDraft {
    /// Rejects drafts whose title or content is blank after trimming.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ArticleValidationError::EmptyContent);
        }
        Ok(())
    }
}

impl Article {
    /// Returns the body with HTML tags stripped and whitespace collapsed.
    pub fn plain_text(&self) -> String {
        let stripped = HTML_TAG_RE.replace_all(&self.content, " ");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Estimated reading time in whole minutes, never below one.
    pub fn reading_time_minutes(&self) -> usize {
        let words = self.plain_text().split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}
