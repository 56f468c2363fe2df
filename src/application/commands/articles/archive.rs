// src/application/commands/articles/archive.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleStatus, events::ArticleEvent, specifications::CanModifyArticleSpec},
        user::User,
    },
};

impl ArticleCommandService {
    pub async fn archive_article(
        &self,
        actor: &User,
        id: ArticleId,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;

        if !CanModifyArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to archive article",
            ));
        }

        // Archiving an archived article is a no-op; nothing to save or unindex.
        if article.status == ArticleStatus::Archived {
            return Ok(article.into());
        }

        let prior_status = article.status;
        let now = self.clock.now();
        article.archive(now)?;
        let saved = self.repo.save(article).await?;

        tracing::info!(
            event = ?ArticleEvent::Archived { id: saved.id, at: now },
            "article archived"
        );

        if prior_status == ArticleStatus::Published && !self.search_index.remove(saved.id).await {
            tracing::warn!(article_id = %saved.id, "failed to remove archived article from index");
        }

        Ok(saved.into())
    }
}
