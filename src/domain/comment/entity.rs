// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub author_id: UserId,
    pub article_id: ArticleId,
    pub status: CommentStatus,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        content: CommentContent,
        author_id: UserId,
        article_id: ArticleId,
        parent_id: Option<CommentId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommentId::generate(),
            content,
            author_id,
            article_id,
            status: CommentStatus::Pending,
            parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moderator approval. Approving twice is a conflict.
    pub fn approve(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == CommentStatus::Approved {
            return Err(DomainError::Conflict(format!(
                "comment {} is already approved",
                self.id
            )));
        }
        self.status = CommentStatus::Approved;
        self.updated_at = now;
        Ok(())
    }

    /// Moderator rejection. Rejecting twice is a no-op.
    pub fn reject(&mut self, now: DateTime<Utc>) {
        if self.status == CommentStatus::Rejected {
            return;
        }
        self.status = CommentStatus::Rejected;
        self.updated_at = now;
    }

    /// Unconditional spam flag, from creation-time detection, batch scans,
    /// or an explicit moderator action.
    pub fn mark_spam(&mut self, now: DateTime<Utc>) {
        self.status = CommentStatus::Spam;
        self.updated_at = now;
    }
}
