use super::ArticleQueryService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::statistics::ArticleStats,
};
use crate::domain::article::ArticleId;

impl ArticleQueryService {
    /// Counters for one article. Eventually consistent; reads go straight to
    /// the statistics backend.
    pub async fn article_statistics(&self, id: ArticleId) -> ApplicationResult<ArticleStats> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(format!("article {id}")));
        }
        self.statistics.article_stats(id).await
    }
}
