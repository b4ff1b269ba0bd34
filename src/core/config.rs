use std::env;
use std::time::Duration;

use crate::errors::NewsFlashError;

pub const DEFAULT_ARTICLE_SEARCH_URL: &str =
    "https://api.nytimes.com/svc/search/v2/articlesearch.json";
pub const DEFAULT_TOPIC: &str = "world news";
pub const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 6000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nyt_api_key: String,
    pub article_search_url: String,
    pub default_topic: String,
    pub share_endpoint_url: Option<String>,
    pub share_bearer_token: Option<String>,
    /// Deadline applied to every outbound collaborator call.
    pub collaborator_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, NewsFlashError> {
        Ok(Self {
            nyt_api_key: env::var("NYT_API_KEY")
                .map_err(|e| NewsFlashError::ConfigError(format!("NYT_API_KEY: {}", e)))?,
            article_search_url: env::var("ARTICLE_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_ARTICLE_SEARCH_URL.to_string()),
            default_topic: env::var("DEFAULT_TOPIC")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            share_endpoint_url: env::var("SHARE_ENDPOINT_URL").ok(),
            share_bearer_token: env::var("SHARE_BEARER_TOKEN").ok(),
            collaborator_timeout: parse_timeout(env::var("COLLABORATOR_TIMEOUT_MS").ok())?,
        })
    }
}

fn parse_timeout(raw: Option<String>) -> Result<Duration, NewsFlashError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(DEFAULT_COLLABORATOR_TIMEOUT_MS));
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(NewsFlashError::ConfigError(format!(
            "COLLABORATOR_TIMEOUT_MS must be a positive integer, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset() {
        assert_eq!(
            parse_timeout(None).unwrap(),
            Duration::from_millis(DEFAULT_COLLABORATOR_TIMEOUT_MS)
        );
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(parse_timeout(Some("0".into())).is_err());
        assert!(parse_timeout(Some("soon".into())).is_err());
        assert_eq!(
            parse_timeout(Some(" 2500 ".into())).unwrap(),
            Duration::from_millis(2500)
        );
    }
}
