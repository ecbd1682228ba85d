//! Adapter for the original flat generation endpoint.
//!
//! The predecessor API took a flat request and returned a flat article.
//! This module maps that shape onto the pipeline: word count buckets into
//! a length class, keywords join into the SEO keyword string, and the
//! pipeline's nested result flattens back out with a word count recomputed
//! from the final content.

use crate::{ApiError, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;
use vasari_client::CompletionBackend;
use vasari_core::{Article, ContentLength, GenerationParams, Tone};
use vasari_error::{FieldError, ValidationError};

/// The original generation request shape.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyRequest {
    /// Subject to write about
    pub topic: String,
    /// Keywords, joined into the SEO keyword string
    pub keywords: Vec<String>,
    /// Tone name; unknown values fall back to the default
    pub tone: Option<String>,
    /// Target word count, bucketed into a length class
    pub word_count: Option<u32>,
    /// Accepted and ignored; the pipeline does not produce images
    pub include_images: bool,
    /// Maps to the optimization stage toggle
    pub seo_optimized: bool,
}

/// The original flat article response shape.
#[derive(Debug, Serialize)]
pub struct LegacyArticle {
    /// Always true on this path; failures use the error envelope
    pub success: bool,
    /// Stored article id
    pub id: Uuid,
    /// Final title
    pub title: String,
    /// Final body in markdown
    pub content: String,
    /// Requested subject
    pub topic: String,
    /// Tone the article was generated with
    pub tone: String,
    /// Keywords from the request
    pub keywords: Vec<String>,
    /// Word count recomputed from the final content
    pub word_count: usize,
    /// Whether the optimization stage ran
    pub seo_optimized: bool,
    /// When the article was stored
    pub created_at: DateTime<Utc>,
    /// Final pipeline status
    pub status: String,
}

/// Bucket a requested word count into a length class.
fn bucket_length(word_count: Option<u32>) -> ContentLength {
    match word_count {
        Some(count) if count > 1500 => ContentLength::Long,
        Some(count) if count > 1000 => ContentLength::Medium,
        Some(_) => ContentLength::Short,
        None => ContentLength::default(),
    }
}

/// Parse a tone name leniently; unknown names get the default.
fn parse_tone(tone: Option<&str>) -> Tone {
    tone.and_then(|name| serde_json::from_value(Value::String(name.to_lowercase())).ok())
        .unwrap_or_default()
}

impl LegacyRequest {
    fn into_params(self) -> Result<(GenerationParams, Vec<String>), ValidationError> {
        let mut errors = Vec::new();
        GenerationParams::check_topic(&self.topic, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        let params = GenerationParams {
            topic: self.topic,
            article_count: 1,
            content_length: bucket_length(self.word_count),
            tone: parse_tone(self.tone.as_deref()),
            seo_keywords: self.keywords.join(", "),
            auto_optimize: self.seo_optimized,
            // The original endpoint never reported analytics.
            include_analytics: false,
            ..GenerationParams::default()
        };
        Ok((params, self.keywords))
    }
}

fn flatten(article: Article, keywords: Vec<String>, seo_optimized: bool) -> LegacyArticle {
    let content = article.result.content().to_string();
    LegacyArticle {
        success: true,
        id: article.id,
        title: article.result.title().to_string(),
        word_count: content.split_whitespace().count(),
        content,
        topic: article.topic,
        tone: article.tone.to_string(),
        keywords,
        seo_optimized,
        created_at: article.created_at,
        status: article.status,
    }
}

/// Run the pipeline for a legacy-shaped request.
#[instrument(skip_all)]
pub async fn generate_legacy<B: CompletionBackend>(
    State(state): State<AppState<B>>,
    body: Option<Json<LegacyRequest>>,
) -> Result<(StatusCode, Json<LegacyArticle>), ApiError> {
    let Json(request) = body.unwrap_or_default();
    let seo_optimized = request.seo_optimized;
    let (params, keywords) = request.into_params()?;

    let article = state.orchestrator.generate(&params).await?;
    Ok((
        StatusCode::CREATED,
        Json(flatten(article, keywords, seo_optimized)),
    ))
}
