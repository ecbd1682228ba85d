//! The five-stage pipeline orchestrator.

use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use vasari_client::{
    CompletionBackend, GenerationClient, RequestPacer, candidate_prompt, optimization_prompt,
    prediction_prompt, selection_prompt, trend_prompt,
};
use vasari_core::{
    Article, ArticleCandidate, ArticleOutcome, GenerationParams, OptimizationResult,
    PerformancePrediction, SelectionResult, TaskKind, TrendingTopic,
};
use vasari_error::{PipelineError, PipelineErrorKind};
use vasari_store::ArticleStore;

/// Shape stage 1 responses parse into.
#[derive(Debug, Deserialize)]
struct TrendDiscovery {
    trending_topics: Vec<TrendingTopic>,
}

/// Sequences the five generation stages and assembles the final record.
///
/// Stage failure policy:
///
/// | Stage | On failure |
/// |---|---|
/// | 1 Trend discovery | abort the request |
/// | 2 Candidate generation (per item) | skip the item, continue |
/// | 2 Candidate generation (all items) | abort the request |
/// | 3 Selection | abort the request |
/// | 4 Optimization | fall back to the stage-3 result, continue |
/// | 5 Prediction | omit the field, continue |
///
/// Synthetic (fallback) payloads are tolerated for stages 1-2, where
/// placeholder content still yields a coherent run, and surface through
/// the article's `status`. For stages 3-5 a synthetic payload counts as
/// stage failure: a guessed selection would fabricate the one judgment
/// the request exists to make, and a placeholder optimization or
/// prediction would displace or misrepresent genuine content.
pub struct Orchestrator<B> {
    client: GenerationClient<B>,
    store: Arc<dyn ArticleStore>,
    pacer: RequestPacer,
}

impl<B: CompletionBackend> Orchestrator<B> {
    /// Create an orchestrator over a client, store, and shared pacer.
    pub fn new(client: GenerationClient<B>, store: Arc<dyn ArticleStore>, pacer: RequestPacer) -> Self {
        Self {
            client,
            store,
            pacer,
        }
    }

    /// Run the full pipeline for one topic and persist the result.
    ///
    /// Parameters are assumed validated; the HTTP layer rejects
    /// out-of-range requests before they reach the pipeline.
    #[instrument(skip(self, params), fields(topic = %params.topic))]
    pub async fn generate(&self, params: &GenerationParams) -> Result<Article, PipelineError> {
        let started = Instant::now();
        info!("Starting article generation pipeline");

        let (trends, trends_synthetic) = self.discover_trends(params).await?;
        let (candidates, candidates_synthetic) = self.generate_candidates(params, &trends).await?;
        let selection = self.select_candidate(params, &candidates).await?;

        let optimization = if params.auto_optimize {
            self.optimize(params, &selection).await
        } else {
            debug!("Optimization not requested; selection is final");
            None
        };

        let outcome = match optimization {
            Some(optimized) => ArticleOutcome::Optimized(optimized),
            None => ArticleOutcome::Selected(selection),
        };

        let prediction = if params.include_analytics {
            self.predict_performance(&outcome).await
        } else {
            debug!("Analytics not requested; skipping prediction");
            None
        };

        let status = if trends_synthetic || candidates_synthetic {
            "completed_with_fallback"
        } else {
            "completed"
        };

        let article = Article {
            id: Uuid::new_v4(),
            topic: params.topic.clone(),
            content_length: params.content_length,
            tone: params.tone,
            search_depth: params.search_depth,
            recency_hours: params.recency_hours,
            quality_threshold: params.quality_threshold,
            seo_keywords: params.seo_keywords.clone(),
            auto_optimize: params.auto_optimize,
            include_analytics: params.include_analytics,
            trending_topics_analyzed: trends.len() as u32,
            candidates_generated: candidates.len() as u32,
            processing_time_ms: started.elapsed().as_millis() as u64,
            result: outcome,
            performance_prediction: prediction,
            created_at: Utc::now(),
            status: status.to_string(),
        };

        self.store.put(article.clone()).await?;
        info!(
            article_id = %article.id,
            candidates = article.candidates_generated,
            elapsed_ms = article.processing_time_ms,
            status = %article.status,
            "Pipeline completed"
        );
        Ok(article)
    }

    /// Stage 1: discover trending angles. Empty results abort the run.
    #[instrument(skip_all)]
    async fn discover_trends(
        &self,
        params: &GenerationParams,
    ) -> Result<(Vec<TrendingTopic>, bool), PipelineError> {
        self.pacer.until_ready().await;
        let (value, synthetic) = self
            .client
            .invoke_structured(&trend_prompt(params), 2500, 0.8, TaskKind::TrendAnalysis)
            .await?;

        let discovery: TrendDiscovery = serde_json::from_value(value).map_err(|e| {
            // Fallback payloads conform to the schema, so a parse failure
            // here means genuine model output with the right syntax but
            // the wrong shape. Nothing to write about either way.
            warn!(error = %e, "Trend payload did not match the expected shape");
            PipelineError::new(PipelineErrorKind::NoTrendsFound(params.topic.clone()))
        })?;

        if discovery.trending_topics.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::NoTrendsFound(
                params.topic.clone(),
            )));
        }
        debug!(
            count = discovery.trending_topics.len(),
            synthetic, "Trend discovery complete"
        );
        Ok((discovery.trending_topics, synthetic))
    }

    /// Stage 2: one draft per trending topic, failures skipped.
    #[instrument(skip_all)]
    async fn generate_candidates(
        &self,
        params: &GenerationParams,
        trends: &[TrendingTopic],
    ) -> Result<(Vec<ArticleCandidate>, bool), PipelineError> {
        let attempts = (params.article_count as usize).min(trends.len());
        let mut candidates = Vec::with_capacity(attempts);
        let mut any_synthetic = false;

        for (index, topic) in trends.iter().take(attempts).enumerate() {
            self.pacer.until_ready().await;
            let result = self
                .client
                .invoke_structured(
                    &candidate_prompt(params, topic),
                    self.candidate_token_budget(params),
                    0.9,
                    TaskKind::CandidateGeneration,
                )
                .await;

            let (value, synthetic) = match result {
                Ok(pair) => pair,
                Err(e) => {
                    warn!(index, error = %e, "Candidate generation failed; skipping");
                    continue;
                }
            };

            match serde_json::from_value::<ArticleCandidate>(value) {
                Ok(candidate) => {
                    debug!(index, title = %candidate.title, synthetic, "Candidate generated");
                    any_synthetic |= synthetic;
                    candidates.push(candidate);
                }
                Err(e) => {
                    warn!(index, error = %e, "Candidate payload malformed; skipping");
                }
            }
        }

        if candidates.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::AllCandidatesFailed(
                params.topic.clone(),
            )));
        }
        Ok((candidates, any_synthetic))
    }

    /// Stage 3: pick the winner. No fallback; a corrupted selection
    /// cannot be safely guessed.
    #[instrument(skip_all)]
    async fn select_candidate(
        &self,
        params: &GenerationParams,
        candidates: &[ArticleCandidate],
    ) -> Result<SelectionResult, PipelineError> {
        self.pacer.until_ready().await;
        let (value, synthetic) = self
            .client
            .invoke_structured(
                &selection_prompt(candidates, params.quality_threshold),
                2000,
                0.3,
                TaskKind::Selection,
            )
            .await?;

        if synthetic {
            return Err(PipelineError::new(PipelineErrorKind::SelectionFailed(
                "selection response was unparseable".to_string(),
            )));
        }

        serde_json::from_value(value).map_err(|e| {
            PipelineError::new(PipelineErrorKind::SelectionFailed(format!(
                "response lacked a usable selected_article: {}",
                e
            )))
        })
    }

    /// Stage 4: enhancement pass. Any failure falls back to the selection.
    #[instrument(skip_all)]
    async fn optimize(
        &self,
        params: &GenerationParams,
        selection: &SelectionResult,
    ) -> Option<OptimizationResult> {
        self.pacer.until_ready().await;
        let output = self
            .client
            .invoke_structured(
                &optimization_prompt(selection, &params.seo_keywords),
                self.candidate_token_budget(params) + 500,
                0.4,
                TaskKind::Optimization,
            )
            .await;

        let (value, synthetic) = match output {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "Optimization failed; using unoptimized selection");
                return None;
            }
        };
        if synthetic {
            warn!("Optimization output unparseable; using unoptimized selection");
            return None;
        }

        match serde_json::from_value(value) {
            Ok(optimized) => Some(optimized),
            Err(e) => {
                warn!(error = %e, "Optimization payload malformed; using unoptimized selection");
                None
            }
        }
    }

    /// Stage 5: best-effort forecast. Any failure omits the field.
    #[instrument(skip_all)]
    async fn predict_performance(&self, outcome: &ArticleOutcome) -> Option<PerformancePrediction> {
        self.pacer.until_ready().await;
        let output = self
            .client
            .invoke_structured(
                &prediction_prompt(outcome.title(), outcome.content()),
                1200,
                0.3,
                TaskKind::PerformancePrediction,
            )
            .await;

        let (value, synthetic) = match output {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "Performance prediction failed; omitting");
                return None;
            }
        };
        if synthetic {
            warn!("Prediction output unparseable; omitting");
            return None;
        }

        match serde_json::from_value(value) {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                warn!(error = %e, "Prediction payload malformed; omitting");
                None
            }
        }
    }

    fn candidate_token_budget(&self, params: &GenerationParams) -> u32 {
        let (_, max_words) = params.content_length.word_range();
        // Rough words-to-tokens ratio plus headroom for JSON framing.
        max_words + max_words / 2 + 600
    }
}
