use crate::errors::{AssistantError, AssistantResult};
use crate::models::*;
use crate::openai_service::CompletionService;
use crate::prompt::build_prompt;
use crate::relevance::{KeywordFilter, RelevanceStrategy};
use crate::session::Session;
use std::sync::Arc;

/// Runs one question through filter, prompt and completion.
pub struct QueryService {
    relevance: Arc<dyn RelevanceStrategy>,
    completion_service: Arc<dyn CompletionService>,
}

impl QueryService {
    pub fn new(completion_service: Arc<dyn CompletionService>) -> Self {
        Self::with_strategy(Arc::new(KeywordFilter), completion_service)
    }

    pub fn with_strategy(
        relevance: Arc<dyn RelevanceStrategy>,
        completion_service: Arc<dyn CompletionService>,
    ) -> Self {
        Self {
            relevance,
            completion_service,
        }
    }

    /// Checks the session state, then asks the completion service once.
    pub async fn query(&self, session: &Session, question: &str) -> AssistantResult<Answer> {
        let credential = session.credential()?.clone();
        let menu = Arc::clone(session.menu()?);
        self.query_menu(&credential, &menu, question).await
    }

    /// Same as [`query`](Self::query) for callers that already snapshotted
    /// the session.
    pub async fn query_menu(
        &self,
        credential: &Credential,
        menu: &Menu,
        question: &str,
    ) -> AssistantResult<Answer> {
        if question.trim().is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }
        let start_time = std::time::Instant::now();

        let relevant_dishes = self.relevance.select(question, menu);
        let prompt = build_prompt(&relevant_dishes, question);
        log::debug!(
            "Built prompt from {} dishes ({} chars)",
            relevant_dishes.len(),
            prompt.len()
        );

        let text = self
            .completion_service
            .complete(credential, &prompt)
            .await
            .map_err(|e| {
                log::error!("Completion failed: {}", e);
                AssistantError::from(e)
            })?;

        Ok(Answer {
            text,
            dishes: relevant_dishes.iter().map(|d| d.name().to_string()).collect(),
            prompt,
            processing_time_ms: start_time.elapsed().as_millis(),
        })
    }
}
