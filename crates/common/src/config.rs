//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search provider selection (duckduckgo, mock)
    pub search_provider: String,

    /// Base URL for the instant-answer search API
    pub search_base_url: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            search_provider: env::var("SEARCH_PROVIDER")
                .unwrap_or_else(|_| "duckduckgo".to_string()),
            search_base_url: env::var("SEARCH_BASE_URL")
                .unwrap_or_else(|_| "https://api.duckduckgo.com".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "parley=debug".to_string()),
        };

        tracing::debug!(provider = %config.search_provider, "Configuration loaded");
        Ok(config)
    }
}
