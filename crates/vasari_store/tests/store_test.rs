//! Tests for the in-memory article store.

use chrono::{TimeZone, Utc};
use uuid::Uuid;
use vasari_core::{
    Article, ArticleCandidate, ArticleOutcome, ContentLength, SelectedArticle, SelectionReasoning,
    SelectionResult, Tone,
};
use vasari_store::{ArticleStore, InMemoryArticleStore};

fn sample_article(topic: &str, status: &str, processing_ms: u64, created_offset: i64) -> Article {
    let candidate = ArticleCandidate {
        title: format!("{topic} explained"),
        subtitle: "A closer look".to_string(),
        content: "## Body\n\nText.".to_string(),
        tags: vec!["test".to_string()],
        estimated_read_time: "4 min".to_string(),
        word_count: 800,
        seo_score: 7.2,
        engagement_factors: vec![],
    };
    Article {
        id: Uuid::new_v4(),
        topic: topic.to_string(),
        content_length: ContentLength::Medium,
        tone: Tone::Professional,
        search_depth: 10,
        recency_hours: 24,
        quality_threshold: 7.0,
        seo_keywords: String::new(),
        auto_optimize: false,
        include_analytics: false,
        trending_topics_analyzed: 3,
        candidates_generated: 2,
        processing_time_ms: processing_ms,
        result: ArticleOutcome::Selected(SelectionResult {
            selected_article: SelectedArticle {
                candidate,
                article_index: 0,
            },
            selection_reasoning: SelectionReasoning {
                quality_score: 8.0,
                strengths: vec![],
                optimization_suggestions: vec![],
            },
        }),
        performance_prediction: None,
        created_at: Utc.timestamp_opt(1_700_000_000 + created_offset, 0).unwrap(),
        status: status.to_string(),
    }
}

#[tokio::test]
async fn put_then_get_round_trips_identity() {
    let store = InMemoryArticleStore::new();
    let article = sample_article("AI in Healthcare", "completed", 1200, 0);
    let id = article.id;
    let topic = article.topic.clone();
    let created_at = article.created_at;

    store.put(article).await.unwrap();
    let fetched = store.get(id).await.unwrap().expect("article should exist");

    assert_eq!(fetched.id, id);
    assert_eq!(fetched.topic, topic);
    assert_eq!(fetched.created_at, created_at);
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let store = InMemoryArticleStore::new();
    assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_reports_existence() {
    let store = InMemoryArticleStore::new();
    let article = sample_article("Rust web services", "completed", 900, 0);
    let id = article.id;
    store.put(article).await.unwrap();

    assert!(store.delete(id).await.unwrap());
    assert!(!store.delete(id).await.unwrap());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn list_is_newest_first() {
    let store = InMemoryArticleStore::new();
    store.put(sample_article("older", "completed", 100, 0)).await.unwrap();
    store.put(sample_article("newer", "completed", 100, 60)).await.unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].topic, "newer");
    assert_eq!(listed[1].topic, "older");
}

#[tokio::test]
async fn topic_search_is_case_insensitive() {
    let store = InMemoryArticleStore::new();
    store
        .put(sample_article("AI in Healthcare", "completed", 100, 0))
        .await
        .unwrap();
    store
        .put(sample_article("Quantum computing", "completed", 100, 1))
        .await
        .unwrap();

    let hits = store.search_topic("healthCARE").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].topic, "AI in Healthcare");

    assert!(store.search_topic("blockchain").await.unwrap().is_empty());
}

#[tokio::test]
async fn stats_aggregate_and_are_idempotent() {
    let store = InMemoryArticleStore::new();
    store.put(sample_article("a", "completed", 1000, 0)).await.unwrap();
    store.put(sample_article("b", "completed", 3000, 1)).await.unwrap();
    store
        .put(sample_article("c", "completed_with_fallback", 2000, 2))
        .await
        .unwrap();

    let first = store.stats().await.unwrap();
    assert_eq!(first.total, 3);
    assert_eq!(first.by_status["completed"], 2);
    assert_eq!(first.by_status["completed_with_fallback"], 1);
    assert_eq!(first.by_tone["professional"], 3);
    assert_eq!(first.by_length["medium"], 3);
    assert_eq!(first.average_processing_time_ms, 2000);

    let second = store.stats().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn stats_on_empty_store() {
    let store = InMemoryArticleStore::new();
    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_processing_time_ms, 0);
}
