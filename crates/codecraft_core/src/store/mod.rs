//! Content and identity stores over the durable key-value namespace.
//!
//! # Responsibility
//! - Own the authoritative in-memory state (articles, comments, favorites,
//!   active session) and keep it synchronized with durable storage.
//! - Define the storage key layout shared by every installation.
//!
//! # Invariants
//! - Durable state is the source of truth on (re)initialization.
//! - Unparsable stored values degrade to bundled defaults and are logged,
//!   never surfaced to callers.
//! - Every mutation is followed by a synchronous fire-and-forget write of
//!   the affected key; a failed write leaves in-memory state authoritative.

pub mod content_store;
pub mod defaults;
pub mod guard;
pub mod identity_store;
pub mod query;

/// Storage key holding the full article collection.
pub const ARTICLES_KEY: &str = "CodeCraftIndoPosts";
/// Storage key holding the favorite article-id set.
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key holding the active-session projection.
pub const SESSION_KEY: &str = "currentUser";

/// Storage key holding one article's comment thread.
pub fn comments_key(article_id: &str) -> String {
    format!("comments_{article_id}")
}
