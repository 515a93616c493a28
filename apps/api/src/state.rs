use std::sync::Arc;

use crate::chain::ChainRunner;
use crate::config::Config;
use crate::interview::session::SessionStore;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Template + dispatch over the single process-wide model client.
    pub chain: ChainRunner,
    /// Interview sessions, keyed by session id. Memory only.
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub fn new(model: Arc<dyn CompletionModel>, config: Config) -> Self {
        Self {
            chain: ChainRunner::new(model),
            sessions: SessionStore::new(config.interview_session_ttl()),
            config,
        }
    }
}
