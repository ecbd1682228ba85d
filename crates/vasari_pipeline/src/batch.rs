//! Sequential multi-topic generation.

use crate::Orchestrator;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use vasari_client::CompletionBackend;
use vasari_core::GenerationParams;

/// Outcome of one topic within a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    /// The topic this item ran for
    pub topic: String,
    /// Zero-based position within the batch
    pub index: usize,
    /// "completed" or "failed"
    pub status: String,
    /// Identifier of the stored article, when the run succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<Uuid>,
    /// Failure description, when the run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Accounting for a whole batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// Per-topic results, in request order
    pub results: Vec<BatchItem>,
    /// Number of topics requested
    pub total_topics: usize,
    /// Number of topics that produced a stored article
    pub successful_generations: usize,
    /// Wall-clock time for the whole batch
    pub processing_time_ms: u64,
}

/// Runs the full pipeline once per topic, strictly in order.
///
/// A failed topic is recorded and the batch moves on; one bad topic
/// never sinks its neighbors. Upstream pacing comes from the
/// orchestrator's shared pacer, so no extra delay is inserted between
/// topics.
pub struct BatchRunner<'a, B> {
    orchestrator: &'a Orchestrator<B>,
}

impl<'a, B: CompletionBackend> BatchRunner<'a, B> {
    /// Run batches through the given orchestrator.
    pub fn new(orchestrator: &'a Orchestrator<B>) -> Self {
        Self { orchestrator }
    }

    /// Generate one article per topic, sharing everything but the topic.
    #[instrument(skip_all, fields(topics = topics.len()))]
    pub async fn run(&self, topics: &[String], shared: &GenerationParams) -> BatchOutcome {
        let started = Instant::now();
        let mut results = Vec::with_capacity(topics.len());
        let mut successful = 0;

        for (index, topic) in topics.iter().enumerate() {
            let mut params = shared.clone();
            params.topic = topic.clone();

            match self.orchestrator.generate(&params).await {
                Ok(article) => {
                    successful += 1;
                    results.push(BatchItem {
                        topic: topic.clone(),
                        index,
                        status: "completed".to_string(),
                        article_id: Some(article.id),
                        error: None,
                    });
                }
                Err(e) => {
                    warn!(index, topic = %topic, error = %e, "Batch item failed");
                    results.push(BatchItem {
                        topic: topic.clone(),
                        index,
                        status: "failed".to_string(),
                        article_id: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let outcome = BatchOutcome {
            results,
            total_topics: topics.len(),
            successful_generations: successful,
            processing_time_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            total = outcome.total_topics,
            successful = outcome.successful_generations,
            elapsed_ms = outcome.processing_time_ms,
            "Batch completed"
        );
        outcome
    }
}
