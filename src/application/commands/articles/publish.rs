// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::notification::Notification,
    },
    domain::{
        article::{ArticleId, events::ArticleEvent, specifications::CanPublishArticleSpec},
        errors::DomainError,
        user::User,
    },
};

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        actor: &User,
        id: ArticleId,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;

        if !CanPublishArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to publish article",
            ));
        }

        if article.tags.is_empty() {
            return Err(DomainError::validation(
                "tags",
                "a published article needs at least one tag",
            )
            .into());
        }

        let now = self.clock.now();
        article.publish(now)?;
        let saved = self.repo.save(article).await?;

        tracing::info!(
            event = ?ArticleEvent::Published {
                id: saved.id,
                publisher_id: actor.id,
                at: now,
            },
            "article published"
        );

        // The publish is durable at this point; indexing and notification
        // are best-effort.
        if !self.search_index.index(&saved).await {
            tracing::warn!(article_id = %saved.id, "failed to index published article");
        }

        let notification = Notification::new(
            "Article published",
            format!("'{}' is now live at /{}", saved.title, saved.slug),
        );
        if !self.notifications.send(actor, &notification).await {
            tracing::warn!(article_id = %saved.id, "publish notification was not delivered");
        }

        Ok(saved.into())
    }
}
