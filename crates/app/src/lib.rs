//! Parley application composition root
//!
//! Builds the shared application state once at process start; every
//! consumer (a transport layer, a worker, a test harness) receives it by
//! handle. Nothing in the workspace reaches for ambient global state.

use std::sync::Arc;

use parley_agents::AgentRepository;
use parley_common::Config;
use parley_conversations::ConversationsRepositories;
use parley_search::{SearchConfig, SearchService, SearchServiceFactory};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub conversations: ConversationsRepositories,
    pub agents: AgentRepository,
    pub search: Arc<dyn SearchService>,
}

/// Compose the application state from configuration.
///
/// Seeds the default agent roster and selects the search provider.
pub fn create_state(config: &Config) -> Result<AppState, anyhow::Error> {
    let search_config = SearchConfig {
        provider: config.search_provider.clone(),
        base_url: config.search_base_url.clone(),
    };
    let search = SearchServiceFactory::create(search_config)?;

    tracing::info!(provider = %config.search_provider, "Application state composed");

    Ok(AppState {
        conversations: ConversationsRepositories::new(),
        agents: AgentRepository::new(),
        search: Arc::from(search),
    })
}

/// Install the process-wide tracing subscriber.
///
/// Call once from a binary entry point; libraries never install one.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
