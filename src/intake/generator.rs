//! Interview question generation for a declared tech stack.

use std::sync::Arc;
use std::time::Duration;

use crate::error::LlmError;
use crate::llm::costs::estimate_cost;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};

use super::prompts::{INTERVIEWER_SYSTEM_PROMPT, technical_questions_prompt};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 400;

/// Default upper bound on a single generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Turns a tech-stack answer into a numbered list of interview questions.
pub struct QuestionGenerator {
    llm: Arc<dyn LlmProvider>,
    timeout: Duration,
}

impl QuestionGenerator {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask the provider for questions and return its text, trimmed.
    ///
    /// Fails on provider errors, on an empty response and when the call runs
    /// longer than the configured timeout.
    pub async fn generate_questions(&self, tech_stack: &str) -> Result<String, LlmError> {
        let prompt = technical_questions_prompt(tech_stack);
        let request = CompletionRequest::new(vec![
            ChatMessage::system(INTERVIEWER_SYSTEM_PROMPT),
            ChatMessage::user(&prompt),
        ])
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

        let response = tokio::time::timeout(self.timeout, self.llm.complete(request))
            .await
            .map_err(|_| LlmError::Timeout {
                provider: self.llm.model_name().to_string(),
                timeout: self.timeout,
            })??;

        let cost = estimate_cost(
            self.llm.cost_per_token(),
            response.input_tokens,
            response.output_tokens,
        );
        tracing::debug!(
            model = self.llm.model_name(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            cost_usd = %cost,
            "Question generation finished"
        );

        let questions = response.content.trim();
        if questions.is_empty() {
            return Err(LlmError::InvalidResponse {
                provider: self.llm.model_name().to_string(),
                reason: "response was empty".to_string(),
            });
        }

        if response.output_tokens >= MAX_TOKENS {
            tracing::warn!("Question list hit the {MAX_TOKENS}-token cap and may be cut short");
        }

        Ok(questions.to_string())
    }
}
