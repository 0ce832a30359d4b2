pub mod config;
pub mod errors;
pub mod menu_store;
pub mod models;
pub mod openai_service;
pub mod prompt;
pub mod query_service;
pub mod relevance;
pub mod session;
pub mod shell;

pub use config::AssistantConfig;
pub use errors::{AssistantError, AssistantResult, CompletionError};
pub use menu_store::MenuStore;
pub use models::*;
pub use openai_service::{CompletionService, OpenAiService};
pub use query_service::QueryService;
pub use relevance::{KeywordFilter, RelevanceStrategy};
pub use session::Session;
pub use shell::{InteractionShell, Notice};
