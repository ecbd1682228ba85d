//! Tests for generation parameter defaults and validation.

use vasari_core::{ContentLength, GenerationParams, Tone};

#[test]
fn defaults_match_documented_values() {
    let params = GenerationParams::default();
    assert_eq!(params.article_count, 3);
    assert_eq!(params.content_length, ContentLength::Medium);
    assert_eq!(params.tone, Tone::Professional);
    assert_eq!(params.search_depth, 10);
    assert_eq!(params.recency_hours, 24);
    assert_eq!(params.quality_threshold, 7.0);
    assert!(params.auto_optimize);
    assert!(params.include_analytics);
}

#[test]
fn empty_body_deserializes_then_fails_validation() {
    let params: GenerationParams = serde_json::from_str("{}").unwrap();
    let err = params.validate().unwrap_err();
    assert_eq!(format!("{}", err), "Validation failed");
    assert!(err.errors.iter().any(|e| e.field == "topic"));
}

#[test]
fn validation_reports_every_bad_field() {
    let mut params = GenerationParams::for_topic("AI");
    params.article_count = 9;
    params.search_depth = 2;
    params.quality_threshold = 11.0;
    let err = params.validate().unwrap_err();
    let fields: Vec<&str> = err.errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"topic"));
    assert!(fields.contains(&"article_count"));
    assert!(fields.contains(&"search_depth"));
    assert!(fields.contains(&"quality_threshold"));
}

#[test]
fn shared_validation_ignores_topic() {
    let params = GenerationParams::default();
    assert!(params.validate_shared().is_ok());
    assert!(params.validate().is_err());
}

#[test]
fn topic_boundaries() {
    assert!(GenerationParams::for_topic("abc").validate().is_ok());
    assert!(GenerationParams::for_topic("ab").validate().is_err());
    assert!(GenerationParams::for_topic("a".repeat(200)).validate().is_ok());
    assert!(GenerationParams::for_topic("a".repeat(201)).validate().is_err());
}

#[test]
fn enums_round_trip_lowercase() {
    let json = serde_json::to_string(&Tone::Authoritative).unwrap();
    assert_eq!(json, "\"authoritative\"");
    let back: Tone = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Tone::Authoritative);

    let json = serde_json::to_string(&ContentLength::Long).unwrap();
    assert_eq!(json, "\"long\"");
}
