use crate::utils::TokenCounter;
use anyhow::Result;
use menu_assistant::{AssistantConfig, CompletionService, QueryService, Session};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared state for all HTTP handlers. Each session id owns its own
/// credential and menu.
pub struct AppState {
    pub sessions: RwLock<HashMap<Uuid, Session>>,
    pub query_service: QueryService,
    pub token_counter: TokenCounter,
    pub prompt_token_warning: usize,
}

impl AppState {
    pub fn new(config: &AssistantConfig, completion_service: Arc<dyn CompletionService>) -> Result<Self> {
        Ok(Self {
            sessions: RwLock::new(HashMap::new()),
            query_service: QueryService::new(completion_service),
            token_counter: TokenCounter::new()?,
            prompt_token_warning: config.prompt_token_warning,
        })
    }
}
