// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, CategoryId,
};
use crate::domain::comment::CommentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub tags: BTreeSet<String>,
    pub categories: BTreeSet<CategoryId>,
    /// Comment ids in creation order. Comments are persisted independently;
    /// this is the aggregate's view of them.
    pub comments: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: u64,
}

impl Article {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: ArticleTitle,
        slug: ArticleSlug,
        content: ArticleContent,
        author_id: UserId,
        tags: BTreeSet<String>,
        categories: BTreeSet<CategoryId>,
        status: ArticleStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ArticleId::generate(),
            title,
            slug,
            content,
            author_id,
            status,
            tags,
            categories,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
            published_at: (status == ArticleStatus::Published).then_some(now),
            view_count: 0,
        }
    }

    /// Transition into Published. Rejects a second publish; `published_at`
    /// is stamped on the first publish only and survives archive/re-publish.
    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == ArticleStatus::Published {
            return Err(DomainError::AlreadyPublished {
                id: self.id.to_string(),
            });
        }
        if self.content.is_empty() {
            return Err(DomainError::validation("content", "content cannot be empty"));
        }
        self.status = ArticleStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Transition into Archived. Idempotent when already Archived; only
    /// Published and Draft articles can be archived.
    pub fn archive(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == ArticleStatus::Archived {
            return Ok(());
        }
        if !matches!(
            self.status,
            ArticleStatus::Published | ArticleStatus::Draft
        ) {
            return Err(DomainError::invalid_status(
                self.status,
                "published or draft",
            ));
        }
        self.status = ArticleStatus::Archived;
        self.updated_at = now;
        Ok(())
    }

    /// Attach a comment to the aggregate. Only Published articles accept
    /// comments.
    pub fn add_comment(&mut self, comment_id: CommentId, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != ArticleStatus::Published {
            return Err(DomainError::invalid_status(self.status, "published"));
        }
        self.comments.push(comment_id);
        self.updated_at = now;
        Ok(())
    }

    /// Monotonic view counter. Callable by anyone reading the article.
    pub fn increment_view_count(&mut self, now: DateTime<Utc>) {
        self.view_count += 1;
        self.updated_at = now;
    }

    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: ArticleSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_tags(&mut self, tags: BTreeSet<String>, now: DateTime<Utc>) {
        self.tags = tags;
        self.updated_at = now;
    }

    pub fn set_categories(&mut self, categories: BTreeSet<CategoryId>, now: DateTime<Utc>) {
        self.categories = categories;
        self.updated_at = now;
    }
}
