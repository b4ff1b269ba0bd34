//! Social sharing client module
//!
//! Posts a status update linking to an article through a JSON webhook.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::NewsFlashError;

/// Anything that can publish a link on the user's behalf.
#[async_trait]
pub trait ShareSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `ShareFailed` when the post is rejected or cannot be sent.
    async fn share(&self, url: &str) -> Result<(), NewsFlashError>;
}

/// Status text posted for a shared article.
#[must_use]
pub fn share_status(url: &str) -> String {
    format!("Cool article: {url}")
}

pub struct WebhookShareClient {
    http: Client,
    endpoint: Option<String>,
    bearer_token: Option<String>,
}

impl WebhookShareClient {
    #[must_use]
    pub fn new(endpoint: Option<String>, bearer_token: Option<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            endpoint,
            bearer_token,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.share_endpoint_url.clone(),
            config.share_bearer_token.clone(),
            config.collaborator_timeout,
        )
    }
}

#[async_trait]
impl ShareSink for WebhookShareClient {
    async fn share(&self, url: &str) -> Result<(), NewsFlashError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return Err(NewsFlashError::ShareFailed(
                "SHARE_ENDPOINT_URL is not configured".to_string(),
            ));
        };

        let mut request = self
            .http
            .post(endpoint)
            .json(&json!({ "status": share_status(url) }));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| NewsFlashError::ShareFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Share post failed: status={} body={}", status, body);
            return Err(NewsFlashError::ShareFailed(format!(
                "share endpoint returned status {status}"
            )));
        }

        info!(url = %url, "Shared article link");
        Ok(())
    }
}
