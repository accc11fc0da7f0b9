//! Mock search service implementation
//!
//! Serves a canned instant-answer response through the same
//! normalization path as the real client, and records queries for test
//! assertions. Thread-safe via `Arc<Mutex<>>`.

use std::sync::{Arc, Mutex};

use crate::response::InstantAnswerResponse;
use crate::{SearchError, SearchResults, SearchService};

/// Mock search service that records queries for test assertions.
#[derive(Debug, Clone)]
pub struct MockSearchService {
    response: Arc<Mutex<InstantAnswerResponse>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchService {
    /// Create a mock serving a generic canned response.
    pub fn new() -> Self {
        let canned = InstantAnswerResponse {
            abstract_text: "Mock search summary.".to_string(),
            abstract_source: "MockSource".to_string(),
            abstract_url: "https://example.com/mock".to_string(),
            ..InstantAnswerResponse::default()
        };
        Self::with_response(canned)
    }

    /// Create a mock serving the given response.
    pub fn with_response(response: InstantAnswerResponse) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the canned response.
    pub fn set_response(&self, response: InstantAnswerResponse) {
        *self
            .response
            .lock()
            .expect("response lock poisoned — prior test panicked") = response;
    }

    /// Return all recorded queries.
    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .expect("queries lock poisoned — prior test panicked")
            .clone()
    }

    /// Clear all recorded queries.
    pub fn reset(&self) {
        self.queries
            .lock()
            .expect("queries lock poisoned — prior test panicked")
            .clear();
    }
}

impl Default for MockSearchService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SearchService for MockSearchService {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        tracing::debug!(%query, "Mock search: recording query");
        self.queries
            .lock()
            .map_err(|e| SearchError::Request(format!("queries lock poisoned: {e}")))?
            .push(query.to_string());

        let raw = self
            .response
            .lock()
            .map_err(|e| SearchError::Request(format!("response lock poisoned: {e}")))?
            .clone();

        Ok(SearchResults {
            summary: raw.summary(),
            sources: raw.sources(),
            raw,
        })
    }
}
