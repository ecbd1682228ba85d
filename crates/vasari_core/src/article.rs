//! Pipeline artifacts and the persisted article record.

use crate::{ArticleOutcome, ContentLength, Tone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A newsworthy angle discovered for a user-supplied subject.
///
/// Produced by the trend discovery stage and consumed, unchanged, by
/// candidate generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    /// Headline describing the angle
    pub headline: String,
    /// How significant the angle is, on a 0-10 scale
    pub significance_score: f64,
    /// How fast the angle is moving (e.g., "rising", "peaking")
    pub trend_velocity: String,
    /// Editorial angles worth covering, in priority order
    pub key_angles: Vec<String>,
    /// Keywords to target for search visibility
    pub target_keywords: Vec<String>,
    /// Expected audience interest (e.g., "high", "moderate")
    pub estimated_interest: String,
}

/// One full article draft generated from one trending topic.
///
/// Candidates that fail generation are simply omitted from the candidate
/// list; there are no placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCandidate {
    /// Article title
    pub title: String,
    /// Article subtitle
    pub subtitle: String,
    /// Full article body in markdown
    pub content: String,
    /// Topic tags
    pub tags: Vec<String>,
    /// Human-readable read time (e.g., "6 min")
    pub estimated_read_time: String,
    /// Word count reported by the generator
    pub word_count: u32,
    /// Self-assessed SEO score
    pub seo_score: f64,
    /// What makes this draft engaging
    pub engagement_factors: Vec<String>,
}

/// The chosen candidate, annotated with its position in the candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedArticle {
    /// The winning candidate's content
    #[serde(flatten)]
    pub candidate: ArticleCandidate,
    /// Index of the winner within the submitted candidate list
    pub article_index: u32,
}

/// Why the selection stage picked the candidate it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionReasoning {
    /// Overall quality score for the winner
    pub quality_score: f64,
    /// Strengths that drove the selection
    pub strengths: Vec<String>,
    /// Suggested improvements for the optimization stage
    pub optimization_suggestions: Vec<String>,
}

/// Output of the selection stage: exactly one candidate, with reasoning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// The winning candidate
    pub selected_article: SelectedArticle,
    /// Why it won
    pub selection_reasoning: SelectionReasoning,
}

/// The selected candidate after the SEO/proofreading enhancement pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedArticle {
    /// The enhanced article content
    #[serde(flatten)]
    pub candidate: ArticleCandidate,
    /// Search-result meta description
    pub meta_description: String,
}

/// Output of the optimization stage.
///
/// When optimization is skipped or fails, the [`SelectionResult`] stands in
/// as the final article instead; callers distinguish the two through
/// [`ArticleOutcome`](crate::ArticleOutcome).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The enhanced article
    pub optimized_article: OptimizedArticle,
    /// Changes the optimizer made
    pub optimization_applied: Vec<String>,
    /// SEO-specific improvements
    pub seo_improvements: Vec<String>,
}

/// Predicted audience metrics for the final article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedMetrics {
    /// Expected view range (e.g., "5K-12K")
    pub estimated_views: String,
    /// Expected fraction of readers who finish, 0-1
    pub estimated_read_ratio: f64,
    /// Expected applause/reaction range
    pub estimated_claps: String,
    /// Qualitative viral potential (e.g., "moderate")
    pub viral_potential: String,
}

/// Best-effort performance forecast attached to the final record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePrediction {
    /// Forecast metrics
    pub predicted_metrics: PredictedMetrics,
    /// Factors expected to drive performance
    pub success_factors: Vec<String>,
    /// What would improve the forecast
    pub improvement_recommendations: Vec<String>,
    /// Forecaster's confidence (e.g., "high", "medium")
    pub confidence_level: String,
}

/// The persisted article record returned to callers.
///
/// Identity is assigned exactly once, at persistence time, and never
/// reused. The store holding these records is volatile by design; no
/// record outlives the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier, assigned at persistence time
    pub id: Uuid,
    /// The subject the caller asked to write about
    pub topic: String,
    /// Requested article length bucket
    pub content_length: ContentLength,
    /// Requested tone of voice
    pub tone: Tone,
    /// Requested trend search depth
    pub search_depth: u32,
    /// Requested trend recency window, in hours
    pub recency_hours: u32,
    /// Minimum quality bar given to the selection stage
    pub quality_threshold: f64,
    /// Caller-supplied SEO keywords, if any
    pub seo_keywords: String,
    /// Whether the optimization stage ran
    pub auto_optimize: bool,
    /// Whether the prediction stage ran
    pub include_analytics: bool,
    /// Number of trending topics stage 1 produced
    pub trending_topics_analyzed: u32,
    /// Number of candidates that survived stage 2
    pub candidates_generated: u32,
    /// Total wall time for the pipeline run, in milliseconds
    pub processing_time_ms: u64,
    /// The authoritative final content
    pub result: ArticleOutcome,
    /// Best-effort performance forecast; omitted when prediction was
    /// skipped or failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_prediction: Option<PerformancePrediction>,
    /// When the record was persisted
    pub created_at: DateTime<Utc>,
    /// Terminal pipeline status (e.g., "completed")
    pub status: String,
}
