// src/application/ports/statistics.rs
use crate::application::ApplicationResult;
use crate::domain::article::ArticleId;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct ArticleStats {
    pub views: u64,
    pub comments: u64,
    pub searches_leading_here: u64,
}

/// Eventually-consistent counters; write failures are logged, never fatal.
#[async_trait]
pub trait StatisticsRecorder: Send + Sync {
    async fn record_view(&self, article_id: ArticleId) -> bool;
    async fn record_search(&self, query: &str, result_count: u64) -> bool;
    async fn article_stats(&self, article_id: ArticleId) -> ApplicationResult<ArticleStats>;
}
