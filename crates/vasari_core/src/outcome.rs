//! The authoritative final content of a pipeline run.

use crate::{OptimizationResult, SelectionResult};
use serde::{Deserialize, Serialize};

/// Final content of a pipeline run.
///
/// When the optimization stage ran and succeeded, the outcome carries an
/// `optimized_article`; otherwise the stage-3 selection stands in as final.
/// Serialization is untagged so callers see exactly one of the two keys
/// and can check for `optimized_article` to find the authoritative shape.
///
/// Degradation is graceful, never silent: the selected article is always
/// present in one form or the other.
///
/// # Examples
///
/// ```
/// use vasari_core::ArticleOutcome;
///
/// fn describe(outcome: &ArticleOutcome) -> String {
///     format!("{}: {} words", outcome.title(), outcome.content().split_whitespace().count())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleOutcome {
    /// Stage 4 ran and succeeded
    Optimized(OptimizationResult),
    /// Stage 4 was skipped or failed; the selection is final
    Selected(SelectionResult),
}

impl ArticleOutcome {
    /// Title of the final article, whichever stage produced it.
    pub fn title(&self) -> &str {
        match self {
            Self::Optimized(o) => &o.optimized_article.candidate.title,
            Self::Selected(s) => &s.selected_article.candidate.title,
        }
    }

    /// Body of the final article, whichever stage produced it.
    pub fn content(&self) -> &str {
        match self {
            Self::Optimized(o) => &o.optimized_article.candidate.content,
            Self::Selected(s) => &s.selected_article.candidate.content,
        }
    }

    /// Tags of the final article.
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Optimized(o) => &o.optimized_article.candidate.tags,
            Self::Selected(s) => &s.selected_article.candidate.tags,
        }
    }

    /// Whether the outcome went through the optimization stage.
    pub fn is_optimized(&self) -> bool {
        matches!(self, Self::Optimized(_))
    }
}
