use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsFlashError {
    #[error("Article source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid article reference: {0}")]
    InvalidOrdinal(String),

    #[error("No article has been selected yet")]
    NoSelection,

    #[error("Failed to share article: {0}")]
    ShareFailed(String),

    #[error("Failed to parse skill request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for NewsFlashError {
    fn from(error: reqwest::Error) -> Self {
        NewsFlashError::SourceUnavailable(error.to_string())
    }
}

impl From<serde_json::Error> for NewsFlashError {
    fn from(error: serde_json::Error) -> Self {
        NewsFlashError::ParseError(error.to_string())
    }
}
