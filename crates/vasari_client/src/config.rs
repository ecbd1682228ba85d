//! Upstream client configuration with runtime credential rotation.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Model families known to honor schema-guided decoding.
const SCHEMA_CAPABLE_PREFIXES: &[&str] = &["gpt-4o", "gpt-4.1", "gpt-5"];

/// Configuration for the upstream chat-completion API.
///
/// The credential lives behind a single-writer lock so it can be rotated
/// at runtime through the `/configure` endpoint without restarting the
/// process and without mutating ambient process state. Clones share the
/// same credential cell; a rotation is visible to every holder on their
/// next call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    model: String,
    api_key: Arc<RwLock<Option<String>>>,
}

impl ClientConfig {
    /// Create a configuration with an explicit key (possibly absent).
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: Arc::new(RwLock::new(api_key)),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `VASARI_API_KEY`, `VASARI_BASE_URL`, and `VASARI_MODEL`,
    /// falling back to the public OpenAI endpoint and a default model.
    /// A missing key is not an error; calls fail until one is configured.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("VASARI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("VASARI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = std::env::var("VASARI_API_KEY").ok();
        debug!(base_url = %base_url, model = %model, key_present = api_key.is_some(),
            "Loaded client configuration from environment");
        Self::new(base_url, model, api_key)
    }

    /// Base URL of the upstream API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the active model honors schema-guided decoding.
    pub fn supports_schema(&self) -> bool {
        SCHEMA_CAPABLE_PREFIXES
            .iter()
            .any(|prefix| self.model.starts_with(prefix))
    }

    /// Current credential, if one is configured.
    pub async fn api_key(&self) -> Option<String> {
        self.api_key.read().await.clone()
    }

    /// Whether a credential is currently configured.
    pub async fn api_key_configured(&self) -> bool {
        self.api_key.read().await.is_some()
    }

    /// Rotate the credential. Takes the single writer lock; in-flight
    /// calls finish with the key they already read.
    pub async fn set_api_key(&self, key: impl Into<String>) {
        let mut guard = self.api_key.write().await;
        *guard = Some(key.into());
        info!("Upstream API credential rotated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rotation_is_visible_to_clones() {
        let config = ClientConfig::new("http://localhost:9000/v1", "gpt-4o-mini", None);
        let clone = config.clone();
        assert!(!clone.api_key_configured().await);

        config.set_api_key("sk-test").await;
        assert!(clone.api_key_configured().await);
        assert_eq!(clone.api_key().await.as_deref(), Some("sk-test"));
    }

    #[test]
    fn schema_support_follows_model_family() {
        let capable = ClientConfig::new("x", "gpt-4o-mini", None);
        assert!(capable.supports_schema());
        let incapable = ClientConfig::new("x", "local-llama", None);
        assert!(!incapable.supports_schema());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ClientConfig::new("http://localhost:9000/v1/", "m", None);
        assert_eq!(config.base_url(), "http://localhost:9000/v1");
    }
}
