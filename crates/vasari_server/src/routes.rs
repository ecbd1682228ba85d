//! Route table and request handlers.

use crate::{ApiError, AppState, legacy};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;
use vasari_client::CompletionBackend;
use vasari_core::{Article, GenerationParams};
use vasari_error::{FieldError, ValidationError};
use vasari_pipeline::{BatchOutcome, BatchRunner};

/// Build the service router over the given state.
pub fn create_router<B: CompletionBackend + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/api/articles/generate-advanced", post(generate_advanced))
        .route("/api/articles/generate-batch", post(generate_batch))
        .route("/api/articles/generate", post(legacy::generate_legacy))
        .route("/api/articles", get(list_articles))
        .route("/api/articles/search", get(search_articles))
        .route("/api/articles/stats", get(article_stats))
        .route("/api/articles/:id", get(get_article).delete(delete_article))
        .route("/health", get(health))
        .route("/configure", post(configure))
        .with_state(state)
}

/// Run the full pipeline for one topic.
#[instrument(skip_all)]
async fn generate_advanced<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    body: Option<Json<GenerationParams>>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    // A missing or malformed body validates as an empty request, so the
    // caller sees the field list instead of a bare deserialization error.
    let Json(params) = body.unwrap_or_default();
    params.validate()?;

    let article = state.orchestrator.generate(&params).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// Batch request: topics plus the shared parameter block.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BatchRequest {
    /// Topics to generate, 1-5, each 3-200 chars
    pub topics: Vec<String>,
    /// Parameters shared by every item; per-item topic is substituted
    #[serde(flatten)]
    pub shared: GenerationParams,
}

impl BatchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.topics.is_empty() || self.topics.len() > 5 {
            errors.push(FieldError::new(
                "topics",
                "must contain between 1 and 5 topics",
            ));
        }
        for topic in &self.topics {
            GenerationParams::check_topic(topic, &mut errors);
        }
        if let Err(shared) = self.shared.validate_shared() {
            errors.extend(shared.errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

/// Run the pipeline once per topic, sequentially.
#[instrument(skip_all)]
async fn generate_batch<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    body: Option<Json<BatchRequest>>,
) -> Result<(StatusCode, Json<BatchOutcome>), ApiError> {
    let Json(request) = body.unwrap_or_default();
    request.validate()?;

    let runner = BatchRunner::new(&state.orchestrator);
    let outcome = runner.run(&request.topics, &request.shared).await;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// All stored articles, newest first.
async fn list_articles<B: CompletionBackend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

/// Query string for topic search.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    topic: String,
}

/// Articles whose topic contains the query, case-insensitively.
async fn search_articles<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(state.store.search_topic(&query.topic).await?))
}

/// Aggregate statistics over the store.
async fn article_stats<B: CompletionBackend>(
    State(state): State<AppState<B>>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.store.stats().await?;
    Ok(Json(stats))
}

/// One article by id.
async fn get_article<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Article>, ApiError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Article {} not found", id)))
}

/// Delete an article by id.
async fn delete_article<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if state.store.delete(id).await? {
        Ok(Json(json!({
            "success": true,
            "message": format!("Article {} deleted", id),
        })))
    } else {
        Err(ApiError::NotFound(format!("Article {} not found", id)))
    }
}

/// Liveness and configuration summary.
async fn health<B: CompletionBackend>(State(state): State<AppState<B>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "api_key_configured": state.config.api_key_configured().await,
        "api_version": env!("CARGO_PKG_VERSION"),
        "uptime": state.started_at.elapsed().as_secs(),
    }))
}

/// Body for credential rotation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigureRequest {
    api_key: String,
}

/// Rotate the upstream credential without restarting the process.
#[instrument(skip_all)]
async fn configure<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    body: Option<Json<ConfigureRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.unwrap_or_default();
    if request.api_key.trim().is_empty() {
        return Err(ValidationError::new(vec![FieldError::new(
            "api_key",
            "is required",
        )])
        .into());
    }

    state.config.set_api_key(request.api_key).await;
    info!("Upstream credential configured via API");
    Ok(Json(json!({
        "success": true,
        "message": "API key configured",
    })))
}
