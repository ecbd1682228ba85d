//! Generation client and prompt/schema library for Vasari.
//!
//! This crate wraps the upstream OpenAI-compatible chat-completion API
//! behind the [`CompletionBackend`] trait, and layers on top of it the
//! pieces the pipeline needs to talk to an unreliable text generator:
//!
//! - **Prompt/schema library**: task-specific prompts and strict JSON
//!   schemas for the five pipeline tasks, rendered from a single schema
//!   definition per task so the prompt contract and the validator can
//!   never diverge.
//! - **Extraction**: recovery of JSON from responses wrapped in markdown
//!   fences or surrounding prose.
//! - **Deterministic fallback**: schema-shaped placeholder payloads
//!   substituted when a structured response cannot be parsed, tagged
//!   synthetic so callers can tell placeholder content apart.
//! - **Pacing**: a GCRA request pacer shared by the orchestrator and the
//!   batch runner to respect upstream rate constraints.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod backend;
mod client;
mod config;
mod extraction;
mod mock;
mod pacer;
mod prompt;
mod request;
mod response;
mod schema;

pub use api::ChatApi;
pub use backend::CompletionBackend;
pub use client::{GenerationClient, GenerationOutput};
pub use config::ClientConfig;
pub use extraction::extract_json;
pub use mock::mock_payload;
pub use pacer::RequestPacer;
pub use prompt::{
    candidate_prompt, optimization_prompt, prediction_prompt, selection_prompt, system_persona,
    trend_prompt,
};
pub use request::{ChatCompletionRequest, ChatMessage, JsonSchemaFormat, ResponseFormat};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
pub use schema::{response_contract, schema_for};
