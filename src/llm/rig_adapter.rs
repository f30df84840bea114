//! Bridges rig's `CompletionModel` to our `LlmProvider` trait.

use async_trait::async_trait;
use rig::completion::{CompletionError, CompletionModel};
use rig::message::{AssistantContent, Message};
use rust_decimal::Decimal;

use crate::error::LlmError;

use super::costs::model_cost;
use super::provider::{CompletionRequest, CompletionResponse, LlmProvider, Role};

/// An `LlmProvider` backed by any rig completion model.
pub struct RigAdapter<M> {
    model: M,
    model_name: String,
    cost: (Decimal, Decimal),
}

impl<M: CompletionModel> RigAdapter<M> {
    pub fn new(model: M, model_name: &str) -> Self {
        Self {
            model,
            model_name: model_name.to_string(),
            cost: model_cost(model_name),
        }
    }
}

/// A request split the way rig wants it: preamble, prior turns, prompt.
struct RigParts {
    preamble: Option<String>,
    history: Vec<Message>,
    prompt: Message,
}

fn split_request(provider: &str, request: &CompletionRequest) -> Result<RigParts, LlmError> {
    let mut system = Vec::new();
    let mut turns = Vec::new();
    for message in &request.messages {
        match message.role {
            Role::System => system.push(message.content.as_str()),
            Role::User => turns.push(Message::user(message.content.clone())),
            Role::Assistant => turns.push(Message::assistant(message.content.clone())),
        }
    }

    let prompt = turns.pop().ok_or_else(|| LlmError::RequestFailed {
        provider: provider.to_string(),
        reason: "request has no user or assistant message".to_string(),
    })?;

    Ok(RigParts {
        preamble: (!system.is_empty()).then(|| system.join("\n\n")),
        history: turns,
        prompt,
    })
}

fn map_completion_error(provider: &str, err: CompletionError) -> LlmError {
    match err {
        CompletionError::JsonError(e) => LlmError::InvalidResponse {
            provider: provider.to_string(),
            reason: e.to_string(),
        },
        CompletionError::ResponseError(reason) => LlmError::InvalidResponse {
            provider: provider.to_string(),
            reason,
        },
        other => LlmError::RequestFailed {
            provider: provider.to_string(),
            reason: other.to_string(),
        },
    }
}

#[async_trait]
impl<M> LlmProvider for RigAdapter<M>
where
    M: CompletionModel + 'static,
{
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn cost_per_token(&self) -> (Decimal, Decimal) {
        self.cost
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let RigParts {
            preamble,
            history,
            prompt,
        } = split_request(&self.model_name, &request)?;

        let mut builder = self
            .model
            .completion_request(prompt)
            .messages(history)
            .temperature_opt(request.temperature.map(f64::from))
            .max_tokens_opt(request.max_tokens.map(u64::from));
        if let Some(preamble) = preamble {
            builder = builder.preamble(preamble);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_completion_error(&self.model_name, e))?;

        let content: String = response
            .choice
            .iter()
            .filter_map(|c| match c {
                AssistantContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect();

        Ok(CompletionResponse {
            content,
            input_tokens: u32::try_from(response.usage.input_tokens).unwrap_or(u32::MAX),
            output_tokens: u32::try_from(response.usage.output_tokens).unwrap_or(u32::MAX),
        })
    }
}
