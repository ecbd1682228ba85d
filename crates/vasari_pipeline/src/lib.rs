//! Article generation pipeline for the Vasari service.
//!
//! The [`Orchestrator`] sequences five stages over a completion backend:
//! trend discovery, multi-candidate generation, selection, optional SEO
//! optimization, and optional performance prediction. Stages 1-3 are
//! mandatory and abort the request on failure; stages 4-5 are
//! best-effort enhancements that degrade gracefully. The [`BatchRunner`]
//! drives the orchestrator across multiple topics, strictly
//! sequentially, with shared pacing against the upstream's limits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod orchestrator;

pub use batch::{BatchItem, BatchOutcome, BatchRunner};
pub use orchestrator::Orchestrator;
