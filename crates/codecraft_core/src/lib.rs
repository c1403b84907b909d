//! Core domain logic for the CodeCraft article platform.
//! This crate is the single source of truth for content and identity
//! invariants; presentation layers consume it through the store APIs.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleDraft, ArticleValidationError};
pub use model::comment::Comment;
pub use model::user::{SessionUser, UserAccount};
pub use repo::kv_repo::{KvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use store::content_store::{ContentError, ContentStats, ContentStore};
pub use store::guard::{guard_route, GuardDecision};
pub use store::identity_store::{IdentityStore, SessionState};
pub use store::query::{ArticleQuery, SortOrder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
