//! The seam between the generation client and the upstream transport.

use crate::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use vasari_error::ClientError;

/// A completion capability: submit messages, receive a completion.
///
/// The HTTP implementation is [`ChatApi`](crate::ChatApi); tests drive the
/// pipeline through scripted implementations of this trait.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one chat completion.
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ClientError>;

    /// Model identifier stamped on outgoing requests.
    fn model_name(&self) -> &str;

    /// Whether the backend's model honors schema-guided decoding.
    ///
    /// When false, structured requests carry only the prompt-level JSON
    /// contract and rely on extraction/fallback on the way back.
    fn supports_schema(&self) -> bool {
        false
    }
}
