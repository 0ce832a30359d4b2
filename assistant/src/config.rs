use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_PROMPT_TOKEN_WARNING: usize = 3000;

/// Runtime settings shared by the terminal and HTTP front ends.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub base_url: String,
    pub model: String,
    /// Prompts above this many tokens are logged at `warn`; nothing is cut.
    pub prompt_token_warning: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt_token_warning: DEFAULT_PROMPT_TOKEN_WARNING,
        }
    }
}

impl AssistantConfig {
    /// Reads `OPENAI_BASE_URL`, `OPENAI_MODEL` and `PROMPT_TOKEN_WARNING`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let prompt_token_warning = match env::var("PROMPT_TOKEN_WARNING") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PROMPT_TOKEN_WARNING must be a number, got '{raw}'"))?,
            Err(_) => defaults.prompt_token_warning,
        };

        Ok(Self {
            base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            prompt_token_warning,
        })
    }
}
