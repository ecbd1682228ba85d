//! HTTP surface for the Vasari article generation service.
//!
//! Exposes the pipeline over a small REST API: advanced and batch
//! generation, a legacy-shaped generation endpoint, article retrieval and
//! deletion, store statistics, liveness, and runtime credential rotation.
//! The router is generic over the completion backend so the whole surface
//! can be exercised against a scripted upstream.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod legacy;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use legacy::{LegacyArticle, LegacyRequest};
pub use routes::{BatchRequest, create_router};
pub use state::AppState;
