//! HTTP implementation of the completion backend.

use crate::{ChatCompletionRequest, ChatCompletionResponse, ClientConfig, CompletionBackend};
use async_trait::async_trait;
use tracing::{debug, error, instrument};
use vasari_error::{ClientError, ClientErrorKind};

/// Client for an OpenAI-compatible chat-completion API.
///
/// Reads the credential from the shared [`ClientConfig`] at call time, so
/// a runtime rotation applies to the next request without rebuilding
/// anything.
#[derive(Debug, Clone)]
pub struct ChatApi {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ChatApi {
    /// Create a new API client over the given configuration.
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: ClientConfig) -> Self {
        debug!("Creating chat API client");
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configuration this client reads from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionBackend for ChatApi {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ClientError> {
        let api_key = self
            .config
            .api_key()
            .await
            .ok_or_else(|| ClientError::new(ClientErrorKind::Unconfigured))?;

        let url = format!("{}/chat/completions", self.config.base_url());
        debug!("Sending chat completion request to {}", url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach upstream API");
                ClientError::new(ClientErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status = status, body = %message, "Upstream API returned error");
            return Err(ClientError::new(ClientErrorKind::Api { status, message }));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse completion response");
            ClientError::new(ClientErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(completion_id = %completion.id, "Received completion");
        Ok(completion)
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }

    fn supports_schema(&self) -> bool {
        self.config.supports_schema()
    }
}
