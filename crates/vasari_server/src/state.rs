//! Shared application state.

use std::sync::Arc;
use std::time::Instant;
use vasari_client::{ClientConfig, CompletionBackend};
use vasari_pipeline::Orchestrator;
use vasari_store::ArticleStore;

/// State shared by every request handler.
///
/// Generic over the completion backend so tests can wire in a scripted
/// one; the binary uses [`ChatApi`](vasari_client::ChatApi).
pub struct AppState<B> {
    /// Article storage, shared with the orchestrator
    pub store: Arc<dyn ArticleStore>,
    /// The five-stage pipeline
    pub orchestrator: Arc<Orchestrator<B>>,
    /// Upstream client configuration, for `/health` and `/configure`
    pub config: ClientConfig,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            orchestrator: self.orchestrator.clone(),
            config: self.config.clone(),
            started_at: self.started_at,
        }
    }
}

impl<B: CompletionBackend> AppState<B> {
    /// Assemble state from its parts.
    pub fn new(
        store: Arc<dyn ArticleStore>,
        orchestrator: Orchestrator<B>,
        config: ClientConfig,
    ) -> Self {
        Self {
            store,
            orchestrator: Arc::new(orchestrator),
            config,
            started_at: Instant::now(),
        }
    }
}
