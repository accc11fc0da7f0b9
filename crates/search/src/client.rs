//! DuckDuckGo instant-answer HTTP client
//!
//! Issues GET requests against the instant-answer API at
//! `{base_url}/?q=...&format=json&no_html=1&skip_disambig=1`.

use crate::response::InstantAnswerResponse;
use crate::{SearchConfig, SearchError, SearchResults, SearchService};

/// HTTP client for the DuckDuckGo instant-answer API.
pub struct DuckDuckGoClient {
    http: reqwest::Client,
    base_url: String,
}

impl DuckDuckGoClient {
    /// Create a new client from configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl SearchService for DuckDuckGoClient {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        tracing::debug!(%query, "Sending instant-answer API request");

        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        // The API serves JSON under a non-JSON content type, so read the
        // body as text and decode explicitly.
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;
        let raw: InstantAnswerResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        let results = SearchResults {
            summary: raw.summary(),
            sources: raw.sources(),
            raw,
        };

        tracing::debug!(
            sources = results.sources.len(),
            "Search response normalized"
        );
        Ok(results)
    }
}
