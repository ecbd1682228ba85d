//! Article storage for the Vasari service.
//!
//! Defines the [`ArticleStore`] trait the orchestrator and HTTP layer
//! depend on, and the volatile [`InMemoryArticleStore`] implementation the
//! reference deployment uses. A durable backend (embedded KV store or an
//! external database) can be substituted without touching the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod stats;

pub use memory::InMemoryArticleStore;
pub use stats::StoreStats;

use async_trait::async_trait;
use uuid::Uuid;
use vasari_core::Article;
use vasari_error::StoreError;

/// Keyed storage for generated articles.
///
/// All operations are atomic at key granularity; callers never perform a
/// read-modify-write across requests because each pipeline run owns its
/// id until the single `put` that persists it.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Persist an article under its id.
    async fn put(&self, article: Article) -> Result<(), StoreError>;

    /// Fetch an article by id.
    async fn get(&self, id: Uuid) -> Result<Option<Article>, StoreError>;

    /// Delete an article by id, reporting whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// All articles, newest first.
    async fn list(&self) -> Result<Vec<Article>, StoreError>;

    /// Articles whose topic contains the query, case-insensitively,
    /// newest first.
    async fn search_topic(&self, query: &str) -> Result<Vec<Article>, StoreError>;

    /// Aggregate statistics over every stored article.
    async fn stats(&self) -> Result<StoreStats, StoreError>;
}
