use crate::config::AssistantConfig;
use crate::errors::CompletionError;
use crate::models::*;
use crate::prompt::SYSTEM_INSTRUCTION;
use async_trait::async_trait;
use reqwest::Client;

pub const TEMPERATURE: f32 = 0.7;

/// Text completion backend. One call per question, never retried.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, credential: &Credential, prompt: &str) -> Result<String, CompletionError>;
}

/// OpenAI-compatible `chat/completions` client.
pub struct OpenAiService {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiService {
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &AssistantConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiService {
    async fn complete(&self, credential: &Credential, prompt: &str) -> Result<String, CompletionError> {
        let request = self.build_request(prompt);
        let url = format!("{}/chat/completions", self.base_url);

        log::debug!("Requesting completion from {} with model {}", url, self.model);

        let response = self.client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: extract_error_message(&error_text),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        first_answer(completion)
    }
}

fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

fn first_answer(completion: ChatCompletionResponse) -> Result<String, CompletionError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("response has no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| CompletionError::MalformedResponse("first choice has no content".to_string()))
}
