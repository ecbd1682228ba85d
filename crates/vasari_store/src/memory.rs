//! In-memory implementation of the article store.

use crate::{ArticleStore, StoreStats};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use vasari_core::Article;
use vasari_error::StoreError;

/// Volatile article store backed by a HashMap.
///
/// Stores articles behind an `RwLock` for thread-safe access from
/// concurrent requests. All data is lost when the process exits; that is
/// the documented lifetime, not a deficiency.
///
/// # Example
/// ```no_run
/// use vasari_store::{ArticleStore, InMemoryArticleStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryArticleStore::new();
///     // store.put(article).await, store.get(id).await, ...
///     let _ = store.list().await;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleStore {
    articles: Arc<RwLock<HashMap<Uuid, Article>>>,
}

impl InMemoryArticleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored articles (for testing).
    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    /// Whether the store is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

fn newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn put(&self, article: Article) -> Result<(), StoreError> {
        self.articles.write().await.insert(article.id, article);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Article>, StoreError> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.articles.write().await.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        let mut articles: Vec<Article> = self.articles.read().await.values().cloned().collect();
        newest_first(&mut articles);
        Ok(articles)
    }

    async fn search_topic(&self, query: &str) -> Result<Vec<Article>, StoreError> {
        let needle = query.to_lowercase();
        let mut articles: Vec<Article> = self
            .articles
            .read()
            .await
            .values()
            .filter(|a| a.topic.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        newest_first(&mut articles);
        Ok(articles)
    }

    async fn stats(&self) -> Result<StoreStats, StoreError> {
        let articles = self.articles.read().await;
        let mut stats = StoreStats {
            total: articles.len(),
            ..StoreStats::default()
        };

        let mut total_time: u64 = 0;
        for article in articles.values() {
            *stats.by_status.entry(article.status.clone()).or_default() += 1;
            *stats.by_tone.entry(article.tone.to_string()).or_default() += 1;
            *stats
                .by_length
                .entry(article.content_length.to_string())
                .or_default() += 1;
            total_time += article.processing_time_ms;
        }
        if stats.total > 0 {
            stats.average_processing_time_ms = total_time / stats.total as u64;
        }

        Ok(stats)
    }
}
