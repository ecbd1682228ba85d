//! Prompt construction for the five pipeline tasks.
//!
//! Pure functions, no state, no I/O. Every structured prompt ends with
//! the field contract rendered from the task's schema (see
//! [`response_contract`](crate::response_contract)), so the instructions
//! the model reads and the shape the client validates are one artifact.

use crate::response_contract;
use vasari_core::{ArticleCandidate, GenerationParams, SelectionResult, TaskKind, TrendingTopic};

/// System persona for a task.
pub fn system_persona(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::TrendAnalysis => {
            "You are a senior trend researcher for a digital publication. \
             You identify newsworthy, high-interest angles and back them \
             with concrete keywords."
        }
        TaskKind::CandidateGeneration => {
            "You are an experienced editorial writer. You produce complete, \
             well-structured markdown articles that match a requested tone \
             and length precisely."
        }
        TaskKind::Selection => {
            "You are a managing editor. You compare article drafts \
             critically and commit to a single winner with explicit \
             reasoning."
        }
        TaskKind::Optimization => {
            "You are an SEO editor. You improve search visibility and \
             readability without changing an article's substance or voice."
        }
        TaskKind::PerformancePrediction => {
            "You are a content analytics specialist. You forecast audience \
             metrics from article content and historical publication data."
        }
    }
}

/// Stage 1 prompt: discover trending angles for the caller's topic.
pub fn trend_prompt(params: &GenerationParams) -> String {
    let mut prompt = format!(
        "Analyze current trends around \"{}\".\n\
         Identify up to {} distinct trending angles from the last {} hours.\n\
         Score each angle's significance from 0 to 10 and list the search \
         keywords it should target.",
        params.topic, params.search_depth, params.recency_hours
    );
    if !params.exclude_sources.is_empty() {
        prompt.push_str(&format!(
            "\nIgnore coverage originating from: {}.",
            params.exclude_sources
        ));
    }
    prompt.push_str("\n\n");
    prompt.push_str(&response_contract(TaskKind::TrendAnalysis));
    prompt
}

/// Stage 2 prompt: draft one full candidate from one trending angle.
pub fn candidate_prompt(params: &GenerationParams, topic: &TrendingTopic) -> String {
    let (min_words, max_words) = params.content_length.word_range();
    let mut prompt = format!(
        "Write a complete article about \"{}\".\n\
         Angle: {}\n\
         Key points to cover: {}\n\
         Tone: {}. Length: {} to {} words, in markdown with section headings.",
        topic.headline,
        topic.estimated_interest,
        topic.key_angles.join("; "),
        params.tone,
        min_words,
        max_words,
    );
    if !topic.target_keywords.is_empty() {
        prompt.push_str(&format!(
            "\nWork these keywords in naturally: {}.",
            topic.target_keywords.join(", ")
        ));
    }
    if !params.seo_keywords.is_empty() {
        prompt.push_str(&format!(
            "\nAdditionally target these SEO keywords: {}.",
            params.seo_keywords
        ));
    }
    if !params.custom_prompt_addition.is_empty() {
        prompt.push_str(&format!("\n{}", params.custom_prompt_addition));
    }
    prompt.push_str("\n\n");
    prompt.push_str(&response_contract(TaskKind::CandidateGeneration));
    prompt
}

/// Stage 3 prompt: pick the single best candidate.
pub fn selection_prompt(candidates: &[ArticleCandidate], quality_threshold: f64) -> String {
    let listing = serde_json::to_string_pretty(candidates).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Compare the following {} article candidates and select the single \
         best one. Judge quality of writing, depth, engagement potential, \
         and SEO strength. The winner must clear a quality bar of {:.1} \
         out of 10. Report the winner's zero-based index as article_index \
         and return its content unchanged.\n\nCandidates:\n{}\n\n{}",
        candidates.len(),
        quality_threshold,
        listing,
        response_contract(TaskKind::Selection),
    )
}

/// Stage 4 prompt: SEO/proofreading pass over the winner.
pub fn optimization_prompt(selection: &SelectionResult, seo_keywords: &str) -> String {
    let article = &selection.selected_article.candidate;
    let mut prompt = format!(
        "Optimize the following article for search visibility and \
         readability. Keep its substance, structure, and voice. Fix \
         grammar, tighten phrasing, strengthen the title if needed, and \
         write a meta description under 160 characters.\n\n\
         Title: {}\nSubtitle: {}\n\n{}",
        article.title, article.subtitle, article.content,
    );
    if !seo_keywords.is_empty() {
        prompt.push_str(&format!("\n\nPrioritize these keywords: {}.", seo_keywords));
    }
    if !selection.selection_reasoning.optimization_suggestions.is_empty() {
        prompt.push_str(&format!(
            "\n\nThe selection editor suggested: {}.",
            selection.selection_reasoning.optimization_suggestions.join("; ")
        ));
    }
    prompt.push_str("\n\n");
    prompt.push_str(&response_contract(TaskKind::Optimization));
    prompt
}

/// Stage 5 prompt: forecast audience performance of the final article.
pub fn prediction_prompt(title: &str, content: &str) -> String {
    format!(
        "Predict audience performance for the following article. Estimate \
         view range, read-through ratio, applause range, and viral \
         potential, and explain the factors behind the forecast.\n\n\
         Title: {}\n\n{}\n\n{}",
        title,
        content,
        response_contract(TaskKind::PerformancePrediction),
    )
}
