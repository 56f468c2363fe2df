// src/application/commands/articles/view.rs
use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::ArticleId;

impl ArticleCommandService {
    /// Bump the view counter. No authorization; anyone reading the article
    /// may trigger it.
    pub async fn record_view(&self, id: ArticleId) -> ApplicationResult<ArticleDto> {
        let mut article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;

        article.increment_view_count(self.clock.now());
        let saved = self.repo.save(article).await?;

        if !self.statistics.record_view(saved.id).await {
            tracing::warn!(article_id = %saved.id, "view was not recorded in statistics");
        }

        Ok(saved.into())
    }
}
