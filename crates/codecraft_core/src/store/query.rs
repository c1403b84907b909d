//! Article search, filter and sort projections.
//!
//! # Responsibility
//! - Provide the landing-page query behavior over the in-memory collection.
//!
//! # Invariants
//! - Matching is case-insensitive over title, tag-stripped content, author
//!   and tags.
//! - A blank search term matches everything.
//! - Sorting is stable; equal keys keep the store's insertion order.

use crate::model::article::Article;
use std::cmp::Ordering;

/// Sort orders offered by the article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Publish date descending.
    #[default]
    Newest,
    /// Publish date ascending.
    Oldest,
    /// Title, case-insensitive.
    Title,
    /// Author display name, case-insensitive.
    Author,
}

/// Query options for [`filter_and_sort`].
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    /// Free-text search term; `None` or blank matches everything.
    pub search: Option<String>,
    /// Single-tag filter; `None` keeps all tags.
    pub tag: Option<String>,
    pub sort: SortOrder,
}

impl ArticleQuery {
    /// Creates a query with a search term and default sort.
    pub fn with_search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    /// Creates a query filtering on one tag with default sort.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }
}

/// Applies search term, tag filter and sort order over the collection.
pub fn filter_and_sort<'a>(articles: &'a [Article], query: &ArticleQuery) -> Vec<&'a Article> {
    let term = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Article> = articles
        .iter()
        .filter(|article| match &term {
            Some(term) => matches_term(article, term),
            None => true,
        })
        .filter(|article| match &query.tag {
            Some(tag) => article.tags.iter().any(|candidate| candidate == tag),
            None => true,
        })
        .collect();

    matched.sort_by(|a, b| compare(a, b, query.sort));
    matched
}

fn matches_term(article: &Article, term: &str) -> bool {
    article.title.to_lowercase().contains(term)
        || article.plain_text().to_lowercase().contains(term)
        || article.author.to_lowercase().contains(term)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

fn compare(a: &Article, b: &Article, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::Newest => b.date.cmp(&a.date),
        SortOrder::Oldest => a.date.cmp(&b.date),
        SortOrder::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortOrder::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_and_sort, ArticleQuery, SortOrder};
    use crate::model::article::Article;
    use chrono::NaiveDate;

    fn article(id: &str, title: &str, author: &str, date: &str, tags: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            author_id: 1,
            date: date.parse::<NaiveDate>().unwrap(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            content: format!("<p>isi {title}</p>"),
        }
    }

    fn fixture() -> Vec<Article> {
        vec![
            article("p1", "Belajar Laravel", "Admin", "2025-06-18", &["laravel", "php"]),
            article("p2", "React Hooks", "Jane", "2025-06-15", &["react", "frontend"]),
            article("p3", "Async Rust", "Admin", "2025-06-20", &["rust"]),
        ]
    }

    #[test]
    fn blank_search_matches_everything() {
        let articles = fixture();
        let hits = filter_and_sort(&articles, &ArticleQuery::with_search("   "));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let articles = fixture();
        let by_title = filter_and_sort(&articles, &ArticleQuery::with_search("LARAVEL"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "p1");

        let by_author = filter_and_sort(&articles, &ArticleQuery::with_search("jane"));
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, "p2");

        let by_tag = filter_and_sort(&articles, &ArticleQuery::with_search("front"));
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, "p2");
    }

    #[test]
    fn search_ignores_html_markup_in_content() {
        let articles = vec![article("p1", "Judul", "Admin", "2025-06-18", &[])];
        // `<p>` markup wraps every body; the tag text itself must not match.
        let hits = filter_and_sort(&articles, &ArticleQuery::with_search("<p>"));
        assert!(hits.is_empty());
    }

    #[test]
    fn tag_filter_is_exact() {
        let articles = fixture();
        let hits = filter_and_sort(&articles, &ArticleQuery::with_tag("php"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p1");

        let none = filter_and_sort(&articles, &ArticleQuery::with_tag("ph"));
        assert!(none.is_empty());
    }

    #[test]
    fn sort_orders_apply() {
        let articles = fixture();

        let newest = filter_and_sort(&articles, &ArticleQuery::default());
        let ids: Vec<&str> = newest.iter().map(|article| article.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p1", "p2"]);

        let oldest = filter_and_sort(
            &articles,
            &ArticleQuery {
                sort: SortOrder::Oldest,
                ..ArticleQuery::default()
            },
        );
        let ids: Vec<&str> = oldest.iter().map(|article| article.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1", "p3"]);

        let by_title = filter_and_sort(
            &articles,
            &ArticleQuery {
                sort: SortOrder::Title,
                ..ArticleQuery::default()
            },
        );
        let ids: Vec<&str> = by_title.iter().map(|article| article.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p1", "p2"]);

        let by_author = filter_and_sort(
            &articles,
            &ArticleQuery {
                sort: SortOrder::Author,
                ..ArticleQuery::default()
            },
        );
        assert_eq!(by_author[2].id, "p2");
    }

    #[test]
    fn search_and_tag_filter_compose() {
        let articles = fixture();
        let query = ArticleQuery {
            search: Some("admin".to_string()),
            tag: Some("rust".to_string()),
            sort: SortOrder::Newest,
        };
        let hits = filter_and_sort(&articles, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p3");
    }
}
