//! # Artifact Content Retrieval
//!
//! Fetches artifact content over HTTP from a list of candidate URLs and
//! parses it as JSON. URLs are tried in order; the first one that answers
//! with a parseable JSON body wins. Failures are logged per URL and the
//! last reason is carried in the final error.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::AgentError;
use crate::retry::send_with_backoff;

/// Configuration for artifact retrieval.
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// HTTP client for artifact content.
#[derive(Debug)]
pub struct ArtifactClient {
    client: reqwest::Client,
}

impl ArtifactClient {
    /// Build a client with the given configuration. Follows redirects.
    pub fn new(config: ArtifactConfig) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| AgentError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch artifact content from the first URL that yields JSON.
    ///
    /// Returns `ArtifactUnavailable` with the last failure reason once
    /// every URL has been tried.
    pub async fn fetch_json(&self, urls: &[String]) -> Result<Value, AgentError> {
        let mut last_failure = String::from("no artifact URLs provided");
        for raw_url in urls {
            let url = match Url::parse(raw_url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(url = %raw_url, "skipping malformed artifact URL: {e}");
                    last_failure = format!("malformed URL {raw_url}: {e}");
                    continue;
                }
            };
            tracing::info!(%url, "retrieving artifact content");
            match self.try_fetch(&url).await {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    tracing::warn!(%url, %reason, "failed to retrieve artifact content");
                    last_failure = reason;
                }
            }
        }
        Err(AgentError::ArtifactUnavailable {
            reason: last_failure,
        })
    }

    async fn try_fetch(&self, url: &Url) -> Result<Value, String> {
        let response = send_with_backoff(|| self.client.get(url.clone()).send())
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "{} ({})",
                status.canonical_reason().unwrap_or("HTTP error"),
                status.as_u16()
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("response body is not valid JSON: {e}"))
    }
}
