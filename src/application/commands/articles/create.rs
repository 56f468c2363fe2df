// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleContent, ArticleStatus, ArticleTitle, CategoryId,
            events::ArticleEvent,
        },
        user::User,
    },
};
use std::collections::BTreeSet;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub categories: Vec<CategoryId>,
    pub status: ArticleStatus,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    categories: Vec<CategoryId>,
    status: ArticleStatus,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn categories(mut self, categories: Vec<CategoryId>) -> Self {
        self.categories = categories;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            tags: self.tags,
            categories: self.categories,
            status: self.status,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &User,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        if self.repo.exists_by_title(title.as_str()).await? {
            return Err(ApplicationError::conflict(format!(
                "an article titled '{}' already exists",
                title
            )));
        }

        let now = self.clock.now();
        let slug = self
            .slug_service
            .generate_unique_slug(&title, None, now)
            .await?;

        let tags: BTreeSet<String> = command
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();
        let categories: BTreeSet<CategoryId> = command.categories.into_iter().collect();

        let article = Article::new(
            title, slug, content, actor.id, tags, categories, command.status, now,
        );
        let saved = self.repo.save(article).await?;

        tracing::info!(
            event = ?ArticleEvent::Created {
                id: saved.id,
                author_id: actor.id,
                at: now,
            },
            "article created"
        );

        // Only published articles belong in the index; an index failure never
        // rolls back the create.
        if saved.status == ArticleStatus::Published && !self.search_index.index(&saved).await {
            tracing::warn!(article_id = %saved.id, "failed to index newly created article");
        }

        Ok(saved.into())
    }
}
