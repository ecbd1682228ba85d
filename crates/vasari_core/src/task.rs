//! Pipeline task kinds.

use serde::{Deserialize, Serialize};

/// The five generation tasks the pipeline asks of the upstream model.
///
/// Each kind has its own prompt, JSON schema, and deterministic fallback
/// payload; the kind is what keeps those three artifacts in agreement.
///
/// # Examples
///
/// ```
/// use vasari_core::TaskKind;
///
/// assert_eq!(format!("{}", TaskKind::TrendAnalysis), "trend_analysis");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskKind {
    /// Stage 1: discover trending angles for a topic
    TrendAnalysis,
    /// Stage 2: draft one full article candidate from one angle
    CandidateGeneration,
    /// Stage 3: pick the single best candidate
    Selection,
    /// Stage 4: SEO/proofreading enhancement of the winner
    Optimization,
    /// Stage 5: forecast audience performance
    PerformancePrediction,
}
