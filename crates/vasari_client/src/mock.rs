//! Deterministic fallback payloads for unparseable model output.
//!
//! When a structured response cannot be parsed even after extraction, the
//! client substitutes the task's placeholder payload instead of failing.
//! Every payload conforms to the task's schema, so downstream parsing of
//! a fallback can never fail, and every payload is deterministic, so the
//! behavior is testable. Callers see the substitution through the
//! `synthetic` flag on [`GenerationOutput`](crate::GenerationOutput);
//! placeholder content is never passed off silently as model output.

use serde_json::{Value, json};
use vasari_core::TaskKind;

/// The schema-shaped placeholder payload for a task.
pub fn mock_payload(kind: TaskKind) -> Value {
    match kind {
        TaskKind::TrendAnalysis => json!({
            "trending_topics": [
                {
                    "headline": "Industry adoption accelerates across the sector",
                    "significance_score": 7.5,
                    "trend_velocity": "rising",
                    "key_angles": [
                        "Enterprise rollouts move from pilot to production",
                        "Cost curves shift the build-versus-buy calculus"
                    ],
                    "target_keywords": ["adoption", "enterprise", "production"],
                    "estimated_interest": "high"
                },
                {
                    "headline": "Regulators signal a pragmatic framework",
                    "significance_score": 6.8,
                    "trend_velocity": "steady",
                    "key_angles": ["Compliance timelines firm up"],
                    "target_keywords": ["regulation", "compliance"],
                    "estimated_interest": "moderate"
                }
            ]
        }),
        TaskKind::CandidateGeneration => json!({
            "title": "What This Shift Means in Practice",
            "subtitle": "A grounded look past the headlines",
            "content": "## The state of play\n\nThe conversation has moved \
                from whether to adopt to how fast. This article walks \
                through what changed, who it affects, and what to do about \
                it.\n\n## What changed\n\nThree forces converged: maturing \
                tooling, falling costs, and clearer rules.\n\n## What to do\n\n\
                Start small, measure honestly, and scale what works.",
            "tags": ["analysis", "industry"],
            "estimated_read_time": "6 min",
            "word_count": 1200,
            "seo_score": 7.0,
            "engagement_factors": ["clear structure", "actionable guidance"]
        }),
        TaskKind::Selection => json!({
            "selected_article": {
                "title": "What This Shift Means in Practice",
                "subtitle": "A grounded look past the headlines",
                "content": "## The state of play\n\nPlaceholder selection body.",
                "tags": ["analysis"],
                "estimated_read_time": "6 min",
                "word_count": 1200,
                "seo_score": 7.0,
                "engagement_factors": ["clear structure"],
                "article_index": 0
            },
            "selection_reasoning": {
                "quality_score": 7.0,
                "strengths": ["coherent structure"],
                "optimization_suggestions": ["tighten the introduction"]
            }
        }),
        TaskKind::Optimization => json!({
            "optimized_article": {
                "title": "What This Shift Means in Practice",
                "subtitle": "A grounded look past the headlines",
                "content": "## The state of play\n\nPlaceholder optimized body.",
                "tags": ["analysis", "industry"],
                "estimated_read_time": "6 min",
                "word_count": 1210,
                "seo_score": 7.8,
                "engagement_factors": ["clear structure"],
                "meta_description": "A grounded look at what the shift means in practice."
            },
            "optimization_applied": ["tightened phrasing"],
            "seo_improvements": ["keyword density balanced"]
        }),
        TaskKind::PerformancePrediction => json!({
            "predicted_metrics": {
                "estimated_views": "2K-5K",
                "estimated_read_ratio": 0.55,
                "estimated_claps": "100-300",
                "viral_potential": "moderate"
            },
            "success_factors": ["timely subject"],
            "improvement_recommendations": ["stronger opening hook"],
            "confidence_level": "low"
        }),
    }
}
