// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleContent, ArticleId, ArticleStatus, ArticleTitle, CategoryId,
            specifications::CanModifyArticleSpec,
        },
        errors::DomainError,
        user::User,
    },
};
use std::collections::BTreeSet;

pub struct UpdateArticleCommand {
    pub id: ArticleId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<CategoryId>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &User,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self
            .repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {}", command.id)))?;

        if !CanModifyArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }

        if article.status == ArticleStatus::Deleted {
            return Err(DomainError::invalid_status(
                article.status,
                "draft, published or archived",
            )
            .into());
        }

        let title_opt = command.title.map(ArticleTitle::new).transpose()?;
        let content_opt = command.content.map(ArticleContent::new).transpose()?;
        let now = self.clock.now();

        if let Some(title) = title_opt {
            // Title changes derive a fresh slug; the old one is released.
            let slug = self
                .slug_service
                .generate_unique_slug(&title, Some(article.id), now)
                .await?;
            article.set_title(title, now);
            article.set_slug(slug, now);
        }
        if let Some(content) = content_opt {
            article.set_content(content, now);
        }
        if let Some(tags) = command.tags {
            let tags: BTreeSet<String> = tags
                .into_iter()
                .map(|tag| tag.trim().to_owned())
                .filter(|tag| !tag.is_empty())
                .collect();
            article.set_tags(tags, now);
        }
        if let Some(categories) = command.categories {
            article.set_categories(categories.into_iter().collect(), now);
        }

        let saved = self.repo.save(article).await?;

        if saved.status == ArticleStatus::Published && !self.search_index.update(&saved).await {
            tracing::warn!(article_id = %saved.id, "failed to refresh search index after update");
        }

        Ok(saved.into())
    }
}
