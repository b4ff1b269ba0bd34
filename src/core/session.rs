//! Session-scoped pagination state.
//!
//! A `SessionState` owns the full result list for one topic search and a
//! cursor marking how many articles have been read out. It is persisted in
//! the session attributes between turns and dropped when the session ends.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::core::models::Article;
use crate::errors::NewsFlashError;

/// Number of articles read out per turn.
pub const PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    topic: String,
    articles: Vec<Article>,
    cursor: usize,
    #[serde(default)]
    page_start: usize,
    #[serde(default)]
    selected_index: Option<usize>,
}

/// Creates the session for a fresh search and takes its first page, so the
/// first page already counts as shown.
#[must_use]
pub fn start_session(topic: &str, articles: Vec<Article>) -> (SessionState, Vec<Article>) {
    let mut state = SessionState::new(topic, articles);
    let first_page = state.next_page();
    (state, first_page)
}

impl SessionState {
    /// Creates a session with nothing shown yet.
    #[must_use]
    pub fn new(topic: &str, articles: Vec<Article>) -> Self {
        Self {
            topic: topic.to_string(),
            articles,
            cursor: 0,
            page_start: 0,
            selected_index: None,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn selected_article(&self) -> Option<&Article> {
        self.selected_index.and_then(|i| self.articles.get(i))
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor < self.articles.len()
    }

    /// Number of articles on the most recently presented page.
    #[must_use]
    pub fn shown_on_page(&self) -> usize {
        self.cursor.saturating_sub(self.page_start)
    }

    /// Returns the next page starting at the cursor and advances past it.
    ///
    /// An exhausted result list yields an empty page and leaves the state
    /// untouched. A non-empty page becomes the page ordinals resolve
    /// against, and any earlier selection is cleared.
    pub fn next_page(&mut self) -> Vec<Article> {
        let end = (self.cursor + PAGE_SIZE).min(self.articles.len());
        if end <= self.cursor {
            return Vec::new();
        }
        let page = self.articles[self.cursor..end].to_vec();
        self.page_start = self.cursor;
        self.cursor = end;
        self.selected_index = None;
        page
    }

    /// Resolves a spoken reference ("2", "two", "second") against the page
    /// last presented and records it as the selection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrdinal` when the text is not a recognised ordinal or
    /// names an article that was not on the page.
    pub fn resolve_ordinal(&mut self, text: &str) -> Result<Article, NewsFlashError> {
        let ordinal = parse_ordinal(text).ok_or_else(|| {
            NewsFlashError::InvalidOrdinal(format!("'{}' is not an article number", text.trim()))
        })?;

        let shown = self.shown_on_page();
        if ordinal == 0 || ordinal > shown {
            return Err(NewsFlashError::InvalidOrdinal(format!(
                "article {} was not presented ({} shown)",
                ordinal, shown
            )));
        }

        let index = self.page_start + ordinal - 1;
        let article = self.articles.get(index).cloned().ok_or_else(|| {
            NewsFlashError::InvalidOrdinal(format!("article index {} out of range", index))
        })?;
        self.selected_index = Some(index);
        Ok(article)
    }

    /// Checks the invariants of state restored from session attributes.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.cursor <= self.articles.len()
            && self.page_start <= self.cursor
            && self.cursor - self.page_start <= PAGE_SIZE
            && self
                .selected_index
                .is_none_or(|i| i >= self.page_start && i < self.cursor)
    }
}

/// Parses "1", "one", "first", "1st", "Article 2", "number three" and the
/// like into a 1-based ordinal. Case and surrounding whitespace are ignored.
#[must_use]
pub fn parse_ordinal(text: &str) -> Option<usize> {
    static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(?:(?:article|number)\s+)?(?:the\s+)?([a-z0-9]+)$")
            .expect("static regex compile")
    });

    let normalized = text.trim().to_lowercase();
    let caps = ORDINAL_RE.captures(&normalized)?;
    let token = caps.get(1)?.as_str();

    match token {
        "one" | "first" | "1st" => Some(1),
        "two" | "second" | "2nd" => Some(2),
        "three" | "third" | "3rd" => Some(3),
        digits if digits.bytes().all(|b| b.is_ascii_digit()) => digits.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles(n: usize) -> Vec<Article> {
        (1..=n)
            .map(|i| Article {
                headline: format!("Headline {i}"),
                summary: format!("Summary {i}"),
                url: format!("https://example.com/{i}"),
            })
            .collect()
    }

    #[test]
    fn parse_ordinal_accepts_known_forms() {
        assert_eq!(parse_ordinal("2"), Some(2));
        assert_eq!(parse_ordinal(" Two "), Some(2));
        assert_eq!(parse_ordinal("THIRD"), Some(3));
        assert_eq!(parse_ordinal("1st"), Some(1));
        assert_eq!(parse_ordinal("article one"), Some(1));
        assert_eq!(parse_ordinal("number 3"), Some(3));
        assert_eq!(parse_ordinal("the second"), Some(2));
        assert_eq!(parse_ordinal("7"), Some(7));
    }

    #[test]
    fn parse_ordinal_rejects_unknown_text() {
        assert_eq!(parse_ordinal(""), None);
        assert_eq!(parse_ordinal("four"), None);
        assert_eq!(parse_ordinal("banana"), None);
        assert_eq!(parse_ordinal("all"), None);
        assert_eq!(parse_ordinal("-1"), None);
        assert_eq!(parse_ordinal("one two"), None);
    }

    #[test]
    fn consistency_rejects_tampered_state() {
        let (mut state, _) = start_session("x", articles(5));
        assert!(state.is_consistent());
        state.cursor = 9;
        assert!(!state.is_consistent());

        let (mut state, _) = start_session("x", articles(5));
        state.selected_index = Some(4);
        assert!(!state.is_consistent());
    }

    #[test]
    fn page_start_past_cursor_shows_nothing() {
        let (mut state, _) = start_session("x", articles(5));
        state.page_start = 5;
        assert_eq!(state.shown_on_page(), 0);
        assert!(matches!(
            state.resolve_ordinal("1"),
            Err(NewsFlashError::InvalidOrdinal(_))
        ));
        assert_eq!(state.selected_index(), None);
    }
}
