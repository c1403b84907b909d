//! Comment domain model.
//!
//! # Responsibility
//! - Define the per-article comment record stored under `comments_<id>`.
//!
//! # Invariants
//! - `id` is stable and unique within the installation.
//! - `content` is stored trimmed; blank bodies never reach this record.
//! - No edit operation exists; comments are created and deleted only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One comment inside an article's thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable time-derived identifier (`comment-<epoch_ms>`).
    pub id: String,
    /// Trimmed free-text body.
    pub content: String,
    /// Display name of the comment author at creation time.
    pub author: String,
    #[serde(rename = "authorId")]
    pub author_id: i64,
    /// Creation timestamp, date and time.
    pub date: DateTime<Utc>,
}
