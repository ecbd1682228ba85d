//! Validated request parameters for the generation pipeline.

use serde::{Deserialize, Serialize};
use vasari_error::{FieldError, ValidationError};

/// Article length bucket.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentLength {
    /// Roughly 600-900 words
    Short,
    /// Roughly 1200-1800 words
    #[default]
    Medium,
    /// Roughly 2500-3500 words
    Long,
}

impl ContentLength {
    /// Target word range communicated to the generator.
    pub fn word_range(self) -> (u32, u32) {
        match self {
            Self::Short => (600, 900),
            Self::Medium => (1200, 1800),
            Self::Long => (2500, 3500),
        }
    }
}

/// Tone of voice for generated articles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    /// Polished, business-appropriate
    #[default]
    Professional,
    /// Relaxed and informal
    Casual,
    /// Precise, jargon-tolerant
    Technical,
    /// Direct address, second person
    Conversational,
    /// Confident, expert voice
    Authoritative,
    /// Warm and approachable
    Friendly,
}

/// Parameters for one pipeline run.
///
/// Deserializes leniently (every field has a default) so the HTTP layer can
/// always produce a value; [`validate`](Self::validate) then reports every
/// out-of-range field at once rather than failing fast.
///
/// # Examples
///
/// ```
/// use vasari_core::GenerationParams;
///
/// let params = GenerationParams::for_topic("AI in Healthcare");
/// assert!(params.validate().is_ok());
/// assert_eq!(params.article_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Subject to write about (required, 3-200 chars)
    pub topic: String,
    /// How many candidates to attempt in stage 2 (1-5)
    pub article_count: u32,
    /// Length bucket for drafts
    pub content_length: ContentLength,
    /// Tone of voice for drafts
    pub tone: Tone,
    /// How many trending angles stage 1 should look for (5-20)
    pub search_depth: u32,
    /// Trend recency window in hours (6-72)
    pub recency_hours: u32,
    /// Minimum quality bar for selection (1.0-10.0)
    pub quality_threshold: f64,
    /// Comma-separated SEO keywords (max 500 chars)
    pub seo_keywords: String,
    /// Run the optimization stage
    pub auto_optimize: bool,
    /// Run the performance prediction stage
    pub include_analytics: bool,
    /// Free-form instructions appended to the candidate prompt (max 1000 chars)
    pub custom_prompt_addition: String,
    /// Sources stage 1 should ignore (max 500 chars)
    pub exclude_sources: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            topic: String::new(),
            article_count: 3,
            content_length: ContentLength::default(),
            tone: Tone::default(),
            search_depth: 10,
            recency_hours: 24,
            quality_threshold: 7.0,
            seo_keywords: String::new(),
            auto_optimize: true,
            include_analytics: true,
            custom_prompt_addition: String::new(),
            exclude_sources: String::new(),
        }
    }
}

impl GenerationParams {
    /// Default parameters for a given topic.
    pub fn for_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Validate everything, including the topic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        Self::check_topic(&self.topic, &mut errors);
        self.check_shared(&mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Validate everything except the topic.
    ///
    /// Batch requests carry topics separately and substitute them per item,
    /// so the shared parameter block is checked without one.
    pub fn validate_shared(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        self.check_shared(&mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Validate a single topic string (3-200 chars).
    pub fn check_topic(topic: &str, errors: &mut Vec<FieldError>) {
        let len = topic.chars().count();
        if len < 3 || len > 200 {
            errors.push(FieldError::new(
                "topic",
                "must be between 3 and 200 characters",
            ));
        }
    }

    fn check_shared(&self, errors: &mut Vec<FieldError>) {
        if !(1..=5).contains(&self.article_count) {
            errors.push(FieldError::new("article_count", "must be between 1 and 5"));
        }
        if !(5..=20).contains(&self.search_depth) {
            errors.push(FieldError::new("search_depth", "must be between 5 and 20"));
        }
        if !(6..=72).contains(&self.recency_hours) {
            errors.push(FieldError::new(
                "recency_hours",
                "must be between 6 and 72",
            ));
        }
        if !(1.0..=10.0).contains(&self.quality_threshold) {
            errors.push(FieldError::new(
                "quality_threshold",
                "must be between 1.0 and 10.0",
            ));
        }
        if self.seo_keywords.chars().count() > 500 {
            errors.push(FieldError::new(
                "seo_keywords",
                "must be at most 500 characters",
            ));
        }
        if self.custom_prompt_addition.chars().count() > 1000 {
            errors.push(FieldError::new(
                "custom_prompt_addition",
                "must be at most 1000 characters",
            ));
        }
        if self.exclude_sources.chars().count() > 500 {
            errors.push(FieldError::new(
                "exclude_sources",
                "must be at most 500 characters",
            ));
        }
    }
}
