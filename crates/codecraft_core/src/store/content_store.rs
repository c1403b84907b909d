//! Content store: articles, comment threads and the favorite set.
//!
//! # Responsibility
//! - Hold the single authoritative in-memory collection for each concern.
//! - Reconstruct state from durable storage on startup, with fallbacks.
//! - Persist the affected key after every mutation, fire-and-forget.
//!
//! # Invariants
//! - Storage order is insertion order with new items at the head.
//! - Comment threads are newest-first and loaded lazily per article.
//! - The favorite set is duplicate-free; toggling twice restores the
//!   original membership.
//! - Comment deletion is allowed only for the comment's author.

use crate::clock::{Clock, IdWell};
use crate::model::article::{Article, ArticleDraft, ArticleValidationError};
use crate::model::comment::Comment;
use crate::repo::kv_repo::KvRepository;
use crate::store::query::{filter_and_sort, ArticleQuery};
use crate::store::{comments_key, defaults, ARTICLES_KEY, FAVORITES_KEY};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for content store mutations.
///
/// Storage corruption and write failures never appear here; both are
/// recovered locally and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Validation(ArticleValidationError),
    EmptyCommentBody,
    ArticleNotFound(String),
    CommentNotFound {
        article_id: String,
        comment_id: String,
    },
    NotCommentAuthor {
        comment_id: String,
        requesting_author_id: i64,
    },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EmptyCommentBody => write!(f, "comment body must not be blank"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::CommentNotFound {
                article_id,
                comment_id,
            } => write!(f, "comment {comment_id} not found on article {article_id}"),
            Self::NotCommentAuthor {
                comment_id,
                requesting_author_id,
            } => write!(
                f,
                "author {requesting_author_id} may not delete comment {comment_id} they do not own"
            ),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArticleValidationError> for ContentError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Collection counts derived from the current article set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub articles: usize,
    pub topics: usize,
    pub authors: usize,
}

/// Authoritative in-memory content state synchronized with durable storage.
///
/// Constructed once at startup with the repository handle and clock it
/// should use; there is exactly one mutator context at a time, so no
/// locking is involved.
pub struct ContentStore<R: KvRepository> {
    repo: R,
    clock: Box<dyn Clock>,
    ids: IdWell,
    articles: Vec<Article>,
    comments: HashMap<String, Vec<Comment>>,
    favorites: Vec<String>,
}

impl<R: KvRepository> ContentStore<R> {
    /// Builds the store from durable state.
    ///
    /// A missing or unparsable article collection degrades to the bundled
    /// default set; a missing or unparsable favorite set degrades to empty.
    /// Neither failure reaches the caller.
    pub fn new(repo: R, clock: Box<dyn Clock>) -> Self {
        let articles = load_articles(&repo);
        let favorites = load_favorites(&repo);
        Self {
            repo,
            clock,
            ids: IdWell::new(),
            articles,
            comments: HashMap::new(),
            favorites,
        }
    }

    /// Current collection, insertion order (newest additions first).
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Looks up one article by id.
    pub fn get_article(&self, article_id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == article_id)
    }

    /// Creates an article from a draft and prepends it to the collection.
    ///
    /// Assigns a fresh session-unique id and the current date, then
    /// persists the full collection.
    pub fn add_article(&mut self, draft: ArticleDraft) -> Result<Article, ContentError> {
        draft.validate()?;

        let now = self.clock.now_utc();
        let article = Article {
            id: self.ids.next_id("post", now.timestamp_millis()),
            title: draft.title,
            author: draft.author,
            author_id: draft.author_id,
            date: now.date_naive(),
            tags: draft.tags,
            content: draft.content,
        };

        info!(
            "event=article_added module=content status=ok article_id={} title_len={}",
            article.id,
            article.title.len()
        );
        self.articles.insert(0, article.clone());
        self.persist_articles();
        Ok(article)
    }

    /// Flips membership of `article_id` in the favorite set.
    ///
    /// Returns the new membership. Two toggles restore the original state.
    pub fn toggle_favorite(&mut self, article_id: &str) -> bool {
        let now_favorite = match self.favorites.iter().position(|id| id == article_id) {
            Some(index) => {
                self.favorites.remove(index);
                info!("event=favorite_removed module=content status=ok article_id={article_id}");
                false
            }
            None => {
                self.favorites.push(article_id.to_string());
                info!("event=favorite_added module=content status=ok article_id={article_id}");
                true
            }
        };
        self.persist_favorites();
        now_favorite
    }

    /// Membership test against the favorite set.
    pub fn is_favorite(&self, article_id: &str) -> bool {
        self.favorites.iter().any(|id| id == article_id)
    }

    /// Favorite article ids in insertion order.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Articles whose id is in the favorite set, in the store's order.
    pub fn favorite_articles(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| self.is_favorite(&article.id))
            .collect()
    }

    /// One article's comment thread, newest-first.
    ///
    /// The thread is read from durable storage on first access for that
    /// article; an unknown article yields an empty thread.
    pub fn comments(&mut self, article_id: &str) -> &[Comment] {
        self.ensure_comments_loaded(article_id);
        self.comments
            .get(article_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Adds a comment to the head of an article's thread.
    ///
    /// The body is trimmed; a blank body and an unknown article are both
    /// rejected. Persists that article's thread key.
    pub fn add_comment(
        &mut self,
        article_id: &str,
        author: &str,
        author_id: i64,
        body: &str,
    ) -> Result<Comment, ContentError> {
        let content = body.trim();
        if content.is_empty() {
            return Err(ContentError::EmptyCommentBody);
        }
        if self.get_article(article_id).is_none() {
            return Err(ContentError::ArticleNotFound(article_id.to_string()));
        }

        self.ensure_comments_loaded(article_id);
        let now = self.clock.now_utc();
        let comment = Comment {
            id: self.ids.next_id("comment", now.timestamp_millis()),
            content: content.to_string(),
            author: author.to_string(),
            author_id,
            date: now,
        };

        info!(
            "event=comment_added module=content status=ok article_id={article_id} comment_id={}",
            comment.id
        );
        self.comments
            .entry(article_id.to_string())
            .or_default()
            .insert(0, comment.clone());
        self.persist_comments(article_id);
        Ok(comment)
    }

    /// Removes one comment, enforcing authorship inside the store.
    ///
    /// A request whose `requesting_author_id` does not match the comment's
    /// author is rejected with [`ContentError::NotCommentAuthor`] and the
    /// thread is left unchanged.
    pub fn delete_comment(
        &mut self,
        article_id: &str,
        comment_id: &str,
        requesting_author_id: i64,
    ) -> Result<(), ContentError> {
        self.ensure_comments_loaded(article_id);
        let thread = self
            .comments
            .get_mut(article_id)
            .ok_or_else(|| ContentError::CommentNotFound {
                article_id: article_id.to_string(),
                comment_id: comment_id.to_string(),
            })?;

        let index = thread
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(|| ContentError::CommentNotFound {
                article_id: article_id.to_string(),
                comment_id: comment_id.to_string(),
            })?;

        if thread[index].author_id != requesting_author_id {
            warn!(
                "event=comment_delete_denied module=content status=denied article_id={article_id} comment_id={comment_id} requester={requesting_author_id}"
            );
            return Err(ContentError::NotCommentAuthor {
                comment_id: comment_id.to_string(),
                requesting_author_id,
            });
        }

        thread.remove(index);
        info!(
            "event=comment_deleted module=content status=ok article_id={article_id} comment_id={comment_id}"
        );
        self.persist_comments(article_id);
        Ok(())
    }

    /// Articles matching a search/filter/sort query.
    pub fn search_articles(&self, query: &ArticleQuery) -> Vec<&Article> {
        filter_and_sort(&self.articles, query)
    }

    /// Every tag label across the collection, first-seen order, deduplicated.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for article in &self.articles {
            for tag in &article.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Collection counts for the landing page header.
    pub fn stats(&self) -> ContentStats {
        let mut authors: Vec<&str> = Vec::new();
        for article in &self.articles {
            if !authors.contains(&article.author.as_str()) {
                authors.push(&article.author);
            }
        }
        ContentStats {
            articles: self.articles.len(),
            topics: self.all_tags().len(),
            authors: authors.len(),
        }
    }

    fn ensure_comments_loaded(&mut self, article_id: &str) {
        if self.comments.contains_key(article_id) {
            return;
        }
        let thread = load_json_or(&self.repo, &comments_key(article_id), Vec::new, "comments");
        self.comments.insert(article_id.to_string(), thread);
    }

    fn persist_articles(&self) {
        persist_json(&self.repo, ARTICLES_KEY, &self.articles, "articles");
    }

    fn persist_favorites(&self) {
        persist_json(&self.repo, FAVORITES_KEY, &self.favorites, "favorites");
    }

    fn persist_comments(&self, article_id: &str) {
        let thread = self.comments.get(article_id);
        let empty = Vec::new();
        persist_json(
            &self.repo,
            &comments_key(article_id),
            thread.unwrap_or(&empty),
            "comments",
        );
    }
}

fn load_articles(repo: &impl KvRepository) -> Vec<Article> {
    load_json_or(repo, ARTICLES_KEY, defaults::default_articles, "articles")
}

fn load_favorites(repo: &impl KvRepository) -> Vec<String> {
    let mut favorites: Vec<String> = load_json_or(repo, FAVORITES_KEY, Vec::new, "favorites");
    // Set semantics: a hand-edited stored array may carry duplicates.
    let mut seen = Vec::with_capacity(favorites.len());
    favorites.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(id.clone());
            true
        }
    });
    favorites
}

/// Reads and decodes one stored value, degrading to `fallback` on a
/// missing key, a transport error or unparsable JSON. Failures are logged
/// and never returned.
fn load_json_or<T, F>(repo: &impl KvRepository, key: &str, fallback: F, what: &str) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    match repo.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!("event=storage_read module=content status=ok key={key} what={what}");
                value
            }
            Err(err) => {
                warn!(
                    "event=storage_read module=content status=corrupt key={key} what={what} error={err}"
                );
                fallback()
            }
        },
        Ok(None) => fallback(),
        Err(err) => {
            warn!("event=storage_read module=content status=error key={key} what={what} error={err}");
            fallback()
        }
    }
}

/// Serializes and writes one key, fire-and-forget. A failed write is
/// logged; in-memory state stays authoritative for the session.
fn persist_json<T: serde::Serialize>(repo: &impl KvRepository, key: &str, value: &T, what: &str) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            error!(
                "event=storage_write module=content status=error key={key} what={what} error_code=encode_failed error={err}"
            );
            return;
        }
    };

    match repo.write(key, &json) {
        Ok(()) => {
            debug!("event=storage_write module=content status=ok key={key} what={what}");
        }
        Err(err) => {
            error!(
                "event=storage_write module=content status=error key={key} what={what} error_code=write_failed error={err}"
            );
        }
    }
}
