//! The generation client: one upstream call, structured or free-form.

use crate::{
    ChatCompletionRequest, ChatMessage, CompletionBackend, ResponseFormat, extract_json,
    mock_payload, schema_for, system_persona,
};
use std::time::Instant;
use tracing::{debug, instrument, warn};
use vasari_core::TaskKind;
use vasari_error::{ClientError, ClientErrorKind};

/// Result of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    /// Free-form text, returned as-is
    Text(String),
    /// Structured JSON, guaranteed well-formed for the task
    Structured {
        /// The parsed (or substituted) payload
        value: serde_json::Value,
        /// True when the payload is the deterministic fallback rather
        /// than genuine model output
        synthetic: bool,
    },
}

impl GenerationOutput {
    /// The structured payload and its synthetic flag, if this output is
    /// structured.
    pub fn into_structured(self) -> Option<(serde_json::Value, bool)> {
        match self {
            Self::Structured { value, synthetic } => Some((value, synthetic)),
            Self::Text(_) => None,
        }
    }
}

/// Client for one generation call against a completion backend.
///
/// The resilience boundary of the pipeline lives here: when a structured
/// call comes back as text that cannot be parsed into JSON, the client
/// substitutes the task's deterministic fallback payload instead of
/// failing. Callers of structured generation therefore never see
/// malformed JSON; they see a well-formed payload with `synthetic: true`
/// and decide for themselves whether placeholder content is acceptable
/// for their stage.
#[derive(Debug, Clone)]
pub struct GenerationClient<B> {
    backend: B,
}

impl<B: CompletionBackend> GenerationClient<B> {
    /// Wrap a completion backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one generation call, structured or free-form.
    pub async fn invoke(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
        structured: bool,
        kind: TaskKind,
    ) -> Result<GenerationOutput, ClientError> {
        if structured {
            let (value, synthetic) = self
                .invoke_structured(prompt, max_tokens, temperature, kind)
                .await?;
            Ok(GenerationOutput::Structured { value, synthetic })
        } else {
            let text = self
                .invoke_text(prompt, max_tokens, temperature, kind)
                .await?;
            Ok(GenerationOutput::Text(text))
        }
    }

    /// Run one free-form call and return the raw completion text.
    ///
    /// # Errors
    ///
    /// Fails on transport/status failures and on responses that carry no
    /// content.
    #[instrument(skip(self, prompt), fields(task = %kind))]
    pub async fn invoke_text(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
        kind: TaskKind,
    ) -> Result<String, ClientError> {
        self.complete_content(prompt.to_string(), max_tokens, temperature, kind, None)
            .await
    }

    /// Run one structured call and return the payload with its synthetic
    /// flag.
    ///
    /// Appends an explicit pure-JSON instruction to the prompt and, for
    /// schema-capable models, attaches the task's schema as a
    /// `response_format` constraint.
    ///
    /// # Errors
    ///
    /// Fails on transport/status failures and on responses that carry no
    /// content. A response that cannot be parsed into JSON is *not* an
    /// error; see the type-level docs.
    #[instrument(skip(self, prompt), fields(task = %kind))]
    pub async fn invoke_structured(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
        kind: TaskKind,
    ) -> Result<(serde_json::Value, bool), ClientError> {
        let mut user_content = prompt.to_string();
        user_content
            .push_str("\n\nReturn pure JSON only: no markdown fences, no text before or after.");

        let response_format = self
            .backend
            .supports_schema()
            .then(|| ResponseFormat::json_schema(kind.to_string(), schema_for(kind)));

        let content = self
            .complete_content(user_content, max_tokens, temperature, kind, response_format)
            .await?;

        match extract_json(&content).and_then(|json| serde_json::from_str(&json).ok()) {
            Some(value) => Ok((value, false)),
            None => {
                warn!(
                    task = %kind,
                    response_length = content.len(),
                    "Model output was not parseable JSON; substituting deterministic fallback"
                );
                Ok((mock_payload(kind), true))
            }
        }
    }

    /// Build the two-message exchange, run it, and return the first
    /// choice's content.
    async fn complete_content(
        &self,
        user_content: String,
        max_tokens: u32,
        temperature: f32,
        kind: TaskKind,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, ClientError> {
        let request = ChatCompletionRequest {
            model: self.backend.model_name().to_string(),
            messages: vec![
                ChatMessage::system(system_persona(kind)),
                ChatMessage::user(user_content),
            ],
            max_tokens: Some(max_tokens),
            temperature: Some(temperature.clamp(0.0, 2.0)),
            response_format,
        };

        let started = Instant::now();
        let response = self.backend.complete(&request).await?;
        debug!(
            task = %kind,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generation call completed"
        );

        response
            .first_content()
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| ClientError::new(ClientErrorKind::MissingContent))
    }
}
