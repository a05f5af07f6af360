use std::sync::Arc;

use crate::chat::manager::SessionManager;
use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<SessionManager>,
    /// Completion backend for chat replies. `GeminiClient` in production.
    pub completions: Arc<dyn CompletionService>,
}

impl AppState {
    pub fn new(config: Config, completions: Arc<dyn CompletionService>) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(config.max_chat_sessions)),
            config,
            completions,
        }
    }
}
