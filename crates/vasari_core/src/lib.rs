//! Core data types for the Vasari article generation service.
//!
//! This crate provides the pipeline artifacts (trending topics, article
//! candidates, selection/optimization/prediction results), the persisted
//! `Article` record, and the validated request parameter types shared by
//! the orchestrator and the HTTP surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod outcome;
mod params;
mod task;

pub use article::{
    Article, ArticleCandidate, OptimizationResult, OptimizedArticle, PerformancePrediction,
    PredictedMetrics, SelectedArticle, SelectionReasoning, SelectionResult, TrendingTopic,
};
pub use outcome::ArticleOutcome;
pub use params::{ContentLength, GenerationParams, Tone};
pub use task::TaskKind;
