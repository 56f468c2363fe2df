// src/application/ports/search.rs
use crate::application::ApplicationResult;
use crate::domain::article::{Article, ArticleId};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct SearchHits {
    pub articles: Vec<Article>,
    pub total: u64,
}

/// Full-text index over published articles. Index maintenance returns a
/// success boolean; callers log failures and never let them unwind a
/// committed write.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn index(&self, article: &Article) -> bool;
    async fn update(&self, article: &Article) -> bool;
    async fn remove(&self, article_id: ArticleId) -> bool;
    async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> ApplicationResult<SearchHits>;
}
