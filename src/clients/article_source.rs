//! Article search client module
//!
//! Fetches headlines for a topic from the New York Times article search API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::Article;
use crate::errors::NewsFlashError;

/// Anything that can turn a topic into an ordered list of articles.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `SourceUnavailable` on network, status or parse failure.
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>, NewsFlashError>;
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: Option<SearchResponse>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    // Older documents carry `headline: []` instead of an object.
    #[serde(default)]
    headline: Value,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    lead_paragraph: Option<String>,
    snippet: Option<String>,
    web_url: Option<String>,
}

fn non_blank(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

impl SearchDoc {
    fn into_article(self) -> Result<Article, String> {
        let headline = non_blank(self.headline.get("main").and_then(Value::as_str))
            .ok_or_else(|| "missing headline".to_string())?;

        let summary = non_blank(self.abstract_text.as_deref())
            .or_else(|| non_blank(self.lead_paragraph.as_deref()))
            .or_else(|| non_blank(self.snippet.as_deref()))
            .ok_or_else(|| format!("no abstract or lead paragraph for '{headline}'"))?;

        let url = non_blank(self.web_url.as_deref())
            .filter(|u| {
                Url::parse(u)
                    .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
                    .unwrap_or(false)
            })
            .ok_or_else(|| format!("missing or invalid url for '{headline}'"))?;

        Ok(Article {
            headline,
            summary,
            url,
        })
    }
}

/// Parses an article search body into articles, in result order.
///
/// Documents lacking a headline, a usable summary or a valid url are
/// skipped; the body as a whole only fails when it is not a search response.
///
/// # Errors
///
/// Returns `SourceUnavailable` if the body is not valid search JSON.
pub fn parse_search_response(body: &str) -> Result<Vec<Article>, NewsFlashError> {
    let envelope: SearchEnvelope = serde_json::from_str(body).map_err(|e| {
        NewsFlashError::SourceUnavailable(format!("Invalid article search JSON: {e}"))
    })?;

    let response = envelope.response.ok_or_else(|| {
        NewsFlashError::SourceUnavailable("Article search body has no response".to_string())
    })?;

    let articles = response
        .docs
        .into_iter()
        .filter_map(|doc| match doc.into_article() {
            Ok(article) => Some(article),
            Err(reason) => {
                warn!("Skipping article search result: {}", reason);
                None
            }
        })
        .collect();

    Ok(articles)
}

/// Article source backed by the New York Times article search API
pub struct NytArticleSource {
    http: Client,
    search_url: String,
    api_key: String,
}

impl NytArticleSource {
    #[must_use]
    pub fn new(search_url: String, api_key: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            search_url,
            api_key,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.article_search_url.clone(),
            config.nyt_api_key.clone(),
            config.collaborator_timeout,
        )
    }
}

#[async_trait]
impl ArticleSource for NytArticleSource {
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>, NewsFlashError> {
        info!(topic = %topic, "Searching articles");

        let resp = self
            .http
            .get(&self.search_url)
            .query(&[("q", topic), ("api-key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NewsFlashError::SourceUnavailable(format!(
                "Article search returned status {status}"
            )));
        }

        let body = resp.text().await?;
        let articles = parse_search_response(&body)?;
        info!(topic = %topic, count = articles.len(), "Article search complete");
        Ok(articles)
    }
}
