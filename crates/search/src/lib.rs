//! Parley search service
//!
//! Reduces a loosely-structured instant-answer API response into a stable
//! summary + sources shape, with support for:
//! - DuckDuckGo instant-answer HTTP client for production
//! - Mock search service for testing and development
//! - Configurable provider and base URL

pub mod client;
pub mod mock;
pub mod response;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use response::{InstantAnswerResponse, TopicResult};

const DEFAULT_BASE_URL: &str = "https://api.duckduckgo.com";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search configuration error: {0}")]
    Configuration(String),

    /// Non-2xx response from the upstream API
    #[error("Search API returned status {0}")]
    Status(u16),

    /// Transport failure before a response was obtained
    #[error("Search request failed: {0}")]
    Request(String),

    /// Response body was not valid JSON of the expected shape; surfaced
    /// in the same message form as a transport failure
    #[error("Search request failed: {0}")]
    Decode(String),

    #[error("No instant answer available")]
    NoInstantAnswer,
}

/// Normalized outcome of a web search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Best-effort one-line summary of the response
    pub summary: String,
    /// Up to five distinct sources, first-seen order
    pub sources: Vec<String>,
    /// The decoded upstream response, passed through for callers that
    /// need fields the normalization drops
    pub raw: InstantAnswerResponse,
}

/// A direct answer extracted from an instant-answer response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstantAnswer {
    pub answer: String,
    #[serde(rename = "type")]
    pub answer_type: String,
}

/// Search service configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search provider (duckduckgo, mock)
    pub provider: String,
    /// Base URL for the instant-answer API
    pub base_url: String,
}

impl SearchConfig {
    /// Create search config from environment variables
    pub fn from_env() -> Self {
        let provider =
            std::env::var("SEARCH_PROVIDER").unwrap_or_else(|_| "duckduckgo".to_string());
        let base_url =
            std::env::var("SEARCH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { provider, base_url }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "duckduckgo".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Search service trait for different implementations.
#[async_trait::async_trait]
pub trait SearchService: Send + Sync {
    /// Run a web search and normalize the response.
    ///
    /// Every failure mode resolves to a `SearchError`; nothing panics
    /// and nothing propagates past this call.
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError>;

    /// Extract a direct answer for a query.
    ///
    /// Transport faults are tagged with the instant-answer context;
    /// upstream status and decode faults pass through unchanged.
    async fn instant_answer(&self, query: &str) -> Result<InstantAnswer, SearchError> {
        let results = match self.search(query).await {
            Ok(results) => results,
            Err(SearchError::Request(cause)) => {
                return Err(SearchError::Request(format!(
                    "instant answer lookup: {}",
                    cause
                )))
            }
            Err(other) => return Err(other),
        };

        results.raw.instant_answer().ok_or(SearchError::NoInstantAnswer)
    }
}

/// Factory for creating SearchService implementations.
pub struct SearchServiceFactory;

impl SearchServiceFactory {
    /// Create a SearchService based on configuration.
    pub fn create(config: SearchConfig) -> Result<Box<dyn SearchService>, SearchError> {
        match config.provider.as_str() {
            "duckduckgo" => {
                tracing::info!("Creating DuckDuckGo search client");
                Ok(Box::new(client::DuckDuckGoClient::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock search service");
                Ok(Box::new(mock::MockSearchService::new()))
            }
            provider => Err(SearchError::Configuration(format!(
                "Unknown search provider: {}. Supported providers: duckduckgo, mock",
                provider
            ))),
        }
    }
}
