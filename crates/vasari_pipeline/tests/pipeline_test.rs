//! Integration tests for the five-stage orchestrator and batch runner.

mod test_utils;

use serde_json::json;
use std::num::NonZeroU32;
use std::sync::Arc;
use test_utils::ScriptedBackend;
use vasari_client::{GenerationClient, RequestPacer};
use vasari_core::GenerationParams;
use vasari_error::PipelineErrorKind;
use vasari_pipeline::{BatchRunner, Orchestrator};
use vasari_store::{ArticleStore, InMemoryArticleStore};

fn trends_reply(count: usize) -> String {
    let topics: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "headline": format!("Angle {}", i),
                "significance_score": 8.0,
                "trend_velocity": "rising",
                "key_angles": ["angle"],
                "target_keywords": ["keyword"],
                "estimated_interest": "high"
            })
        })
        .collect();
    json!({ "trending_topics": topics }).to_string()
}

fn candidate_json(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "subtitle": "sub",
        "content": "## Body\n\nEnough words to matter.",
        "tags": ["rust"],
        "estimated_read_time": "6 min",
        "word_count": 1300,
        "seo_score": 7.5,
        "engagement_factors": ["structure"]
    })
}

fn selection_reply(title: &str) -> String {
    let mut selected = candidate_json(title);
    selected["article_index"] = json!(0);
    json!({
        "selected_article": selected,
        "selection_reasoning": {
            "quality_score": 8.5,
            "strengths": ["depth"],
            "optimization_suggestions": ["shorter intro"]
        }
    })
    .to_string()
}

fn optimization_reply(title: &str) -> String {
    let mut optimized = candidate_json(title);
    optimized["meta_description"] = json!("A concise summary for search results.");
    json!({
        "optimized_article": optimized,
        "optimization_applied": ["tightened phrasing"],
        "seo_improvements": ["keyword placement"]
    })
    .to_string()
}

fn prediction_reply() -> String {
    json!({
        "predicted_metrics": {
            "estimated_views": "5K-10K",
            "estimated_read_ratio": 0.6,
            "estimated_claps": "200-500",
            "viral_potential": "moderate"
        },
        "success_factors": ["timely"],
        "improvement_recommendations": ["stronger hook"],
        "confidence_level": "medium"
    })
    .to_string()
}

fn build(replies: Vec<Result<String, String>>) -> (Orchestrator<ScriptedBackend>, Arc<InMemoryArticleStore>) {
    let store = Arc::new(InMemoryArticleStore::new());
    let pacer = RequestPacer::per_minute(NonZeroU32::new(6000).unwrap());
    let orchestrator = Orchestrator::new(
        GenerationClient::new(ScriptedBackend::new(replies)),
        store.clone(),
        pacer,
    );
    (orchestrator, store)
}

fn scripted(replies: &[String]) -> Vec<Result<String, String>> {
    replies.iter().map(|r| Ok(r.clone())).collect()
}

fn base_params(topic: &str) -> GenerationParams {
    let mut params = GenerationParams::for_topic(topic);
    params.auto_optimize = false;
    params.include_analytics = false;
    params
}

#[tokio::test]
async fn two_candidates_yield_completed_article() {
    let (orchestrator, store) = build(scripted(&[
        trends_reply(2),
        candidate_json("First").to_string(),
        candidate_json("Second").to_string(),
        selection_reply("First"),
    ]));
    let params = base_params("rust async runtimes");

    let article = orchestrator.generate(&params).await.unwrap();

    assert_eq!(article.status, "completed");
    assert_eq!(article.trending_topics_analyzed, 2);
    assert_eq!(article.candidates_generated, 2);
    assert!(store.get(article.id).await.unwrap().is_some());

    let serialized = serde_json::to_value(&article).unwrap();
    assert!(serialized["result"]["selected_article"].is_object());
    assert!(serialized["result"].get("optimized_article").is_none());
    assert!(serialized.get("performance_prediction").is_none());
}

#[tokio::test]
async fn full_run_optimizes_and_predicts() {
    let (orchestrator, _store) = build(scripted(&[
        trends_reply(1),
        candidate_json("Draft").to_string(),
        selection_reply("Draft"),
        optimization_reply("Draft"),
        prediction_reply(),
    ]));
    let mut params = GenerationParams::for_topic("observability pipelines");
    params.article_count = 1;

    let article = orchestrator.generate(&params).await.unwrap();

    assert!(article.result.is_optimized());
    let prediction = article.performance_prediction.unwrap();
    assert_eq!(prediction.confidence_level, "medium");
}

#[tokio::test]
async fn empty_trend_list_aborts() {
    let (orchestrator, store) = build(scripted(&[trends_reply(0)]));
    let params = base_params("a subject nobody covers");

    let err = orchestrator.generate(&params).await.unwrap_err();

    assert!(matches!(err.kind, PipelineErrorKind::NoTrendsFound(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn all_failed_candidates_abort() {
    let (orchestrator, _store) = build(vec![
        Ok(trends_reply(1)),
        Err("connection reset".to_string()),
    ]);
    let mut params = base_params("flaky upstream");
    params.article_count = 1;

    let err = orchestrator.generate(&params).await.unwrap_err();

    assert!(matches!(err.kind, PipelineErrorKind::AllCandidatesFailed(_)));
}

#[tokio::test]
async fn unparseable_selection_aborts() {
    let (orchestrator, store) = build(scripted(&[
        trends_reply(1),
        candidate_json("Only").to_string(),
        "I would pick the first one, probably.".to_string(),
    ]));
    let mut params = base_params("editorial judgment");
    params.article_count = 1;

    let err = orchestrator.generate(&params).await.unwrap_err();

    assert!(matches!(err.kind, PipelineErrorKind::SelectionFailed(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn unparseable_trends_fall_back_and_mark_status() {
    // The fallback trend list carries two topics, so the run proceeds
    // with placeholder angles and says so in the status.
    let (orchestrator, _store) = build(scripted(&[
        "no json here".to_string(),
        candidate_json("From fallback angle").to_string(),
        candidate_json("From second fallback angle").to_string(),
        selection_reply("From fallback angle"),
    ]));
    let mut params = base_params("opaque subject");
    params.article_count = 2;

    let article = orchestrator.generate(&params).await.unwrap();

    assert_eq!(article.status, "completed_with_fallback");
    assert_eq!(article.candidates_generated, 2);
}

#[tokio::test]
async fn candidate_attempts_never_exceed_trend_count() {
    let (orchestrator, _store) = build(scripted(&[
        trends_reply(1),
        candidate_json("Solo").to_string(),
        selection_reply("Solo"),
    ]));
    let mut params = base_params("narrow subject");
    params.article_count = 3;

    let article = orchestrator.generate(&params).await.unwrap();

    assert_eq!(article.trending_topics_analyzed, 1);
    assert_eq!(article.candidates_generated, 1);
}

#[tokio::test]
async fn optimization_failure_degrades_to_selection() {
    let (orchestrator, _store) = build(vec![
        Ok(trends_reply(1)),
        Ok(candidate_json("Draft").to_string()),
        Ok(selection_reply("Draft")),
        Err("gateway timeout".to_string()),
    ]);
    let mut params = GenerationParams::for_topic("degraded enhancement");
    params.article_count = 1;
    params.include_analytics = false;

    let article = orchestrator.generate(&params).await.unwrap();

    assert!(!article.result.is_optimized());
    assert_eq!(article.status, "completed");
}

#[tokio::test]
async fn prediction_failure_omits_the_field() {
    let (orchestrator, _store) = build(vec![
        Ok(trends_reply(1)),
        Ok(candidate_json("Draft").to_string()),
        Ok(selection_reply("Draft")),
        Ok("not a forecast".to_string()),
    ]);
    let mut params = GenerationParams::for_topic("unforecastable");
    params.article_count = 1;
    params.auto_optimize = false;

    let article = orchestrator.generate(&params).await.unwrap();

    assert!(article.performance_prediction.is_none());
    assert_eq!(article.status, "completed");
}

#[tokio::test]
async fn batch_isolates_per_topic_failures() {
    let (orchestrator, store) = build(scripted(&[
        // First topic: full short run.
        trends_reply(1),
        candidate_json("Winner").to_string(),
        selection_reply("Winner"),
        // Second topic: nothing to write about.
        trends_reply(0),
    ]));
    let mut shared = base_params("placeholder");
    shared.article_count = 1;
    let runner = BatchRunner::new(&orchestrator);

    let topics = vec!["healthy topic".to_string(), "barren topic".to_string()];
    let outcome = runner.run(&topics, &shared).await;

    assert_eq!(outcome.total_topics, 2);
    assert_eq!(outcome.successful_generations, 1);
    assert_eq!(outcome.results[0].status, "completed");
    assert!(outcome.results[0].article_id.is_some());
    assert_eq!(outcome.results[1].status, "failed");
    assert!(outcome.results[1].error.as_deref().unwrap().contains("No trending topics"));
    assert_eq!(store.list().await.unwrap().len(), 1);

    let stored = store.list().await.unwrap();
    assert_eq!(stored[0].topic, "healthy topic");
}
