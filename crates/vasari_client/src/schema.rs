//! Strict JSON schemas for the five pipeline tasks.
//!
//! Each task has exactly one schema definition. The schema is used three
//! ways: attached to requests as a `response_format` when the model
//! supports schema-guided decoding, rendered into the prompt's
//! natural-language field contract, and mirrored by the deterministic
//! fallback payloads. One definition, three consumers, no drift.

use serde_json::{Value, json};
use vasari_core::TaskKind;

/// The JSON schema the given task's response must conform to.
pub fn schema_for(kind: TaskKind) -> Value {
    match kind {
        TaskKind::TrendAnalysis => json!({
            "type": "object",
            "properties": {
                "trending_topics": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "headline": { "type": "string" },
                            "significance_score": { "type": "number", "minimum": 0, "maximum": 10 },
                            "trend_velocity": { "type": "string" },
                            "key_angles": { "type": "array", "items": { "type": "string" } },
                            "target_keywords": { "type": "array", "items": { "type": "string" } },
                            "estimated_interest": { "type": "string" }
                        },
                        "required": [
                            "headline", "significance_score", "trend_velocity",
                            "key_angles", "target_keywords", "estimated_interest"
                        ],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["trending_topics"],
            "additionalProperties": false
        }),
        TaskKind::CandidateGeneration => candidate_schema(),
        TaskKind::Selection => json!({
            "type": "object",
            "properties": {
                "selected_article": with_extra_property(
                    candidate_schema(),
                    "article_index",
                    json!({ "type": "integer", "minimum": 0 }),
                ),
                "selection_reasoning": {
                    "type": "object",
                    "properties": {
                        "quality_score": { "type": "number", "minimum": 0, "maximum": 10 },
                        "strengths": { "type": "array", "items": { "type": "string" } },
                        "optimization_suggestions": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["quality_score", "strengths", "optimization_suggestions"],
                    "additionalProperties": false
                }
            },
            "required": ["selected_article", "selection_reasoning"],
            "additionalProperties": false
        }),
        TaskKind::Optimization => json!({
            "type": "object",
            "properties": {
                "optimized_article": with_extra_property(
                    candidate_schema(),
                    "meta_description",
                    json!({ "type": "string", "maxLength": 160 }),
                ),
                "optimization_applied": { "type": "array", "items": { "type": "string" } },
                "seo_improvements": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["optimized_article", "optimization_applied", "seo_improvements"],
            "additionalProperties": false
        }),
        TaskKind::PerformancePrediction => json!({
            "type": "object",
            "properties": {
                "predicted_metrics": {
                    "type": "object",
                    "properties": {
                        "estimated_views": { "type": "string" },
                        "estimated_read_ratio": { "type": "number", "minimum": 0, "maximum": 1 },
                        "estimated_claps": { "type": "string" },
                        "viral_potential": { "type": "string" }
                    },
                    "required": [
                        "estimated_views", "estimated_read_ratio",
                        "estimated_claps", "viral_potential"
                    ],
                    "additionalProperties": false
                },
                "success_factors": { "type": "array", "items": { "type": "string" } },
                "improvement_recommendations": { "type": "array", "items": { "type": "string" } },
                "confidence_level": { "type": "string" }
            },
            "required": [
                "predicted_metrics", "success_factors",
                "improvement_recommendations", "confidence_level"
            ],
            "additionalProperties": false
        }),
    }
}

/// Schema for one article candidate, shared by three tasks.
fn candidate_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "subtitle": { "type": "string" },
            "content": { "type": "string" },
            "tags": { "type": "array", "items": { "type": "string" } },
            "estimated_read_time": { "type": "string" },
            "word_count": { "type": "integer", "minimum": 0 },
            "seo_score": { "type": "number", "minimum": 0, "maximum": 10 },
            "engagement_factors": { "type": "array", "items": { "type": "string" } }
        },
        "required": [
            "title", "subtitle", "content", "tags",
            "estimated_read_time", "word_count", "seo_score", "engagement_factors"
        ],
        "additionalProperties": false
    })
}

/// Extend an object schema with one more required property.
fn with_extra_property(mut schema: Value, name: &str, property: Value) -> Value {
    if let Some(props) = schema
        .get_mut("properties")
        .and_then(Value::as_object_mut)
    {
        props.insert(name.to_string(), property);
    }
    if let Some(required) = schema.get_mut("required").and_then(Value::as_array_mut) {
        required.push(json!(name));
    }
    schema
}

/// Render the task's schema as the prompt's natural-language contract.
///
/// Because the text is derived from the schema at call time, the prompt's
/// field list cannot drift from what the validator and fallback expect.
pub fn response_contract(kind: TaskKind) -> String {
    let schema = schema_for(kind);
    let mut lines = vec![
        "Respond with a single JSON object using exactly these fields:".to_string(),
    ];
    render_object(&schema, 0, &mut lines);
    lines.push("Output ONLY valid JSON. No markdown fences, no commentary.".to_string());
    lines.join("\n")
}

fn render_object(schema: &Value, indent: usize, lines: &mut Vec<String>) {
    let Some(props) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    let pad = "  ".repeat(indent);
    for (name, prop) in props {
        let type_name = prop
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("value");
        match type_name {
            "object" => {
                lines.push(format!("{}- {} (object):", pad, name));
                render_object(prop, indent + 1, lines);
            }
            "array" => {
                let item = prop.get("items").cloned().unwrap_or(Value::Null);
                let item_type = item.get("type").and_then(Value::as_str).unwrap_or("value");
                if item_type == "object" {
                    lines.push(format!("{}- {} (array of objects):", pad, name));
                    render_object(&item, indent + 1, lines);
                } else {
                    lines.push(format!("{}- {} (array of {})", pad, name, item_type));
                }
            }
            other => lines.push(format!("{}- {} ({})", pad, name, other)),
        }
    }
}
