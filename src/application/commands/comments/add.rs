// src/application/commands/comments/add.rs
use super::CommentModerationService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::notification::Notification,
    },
    domain::{
        article::{ArticleId, ArticleStatus},
        comment::{Comment, CommentContent, CommentId, CommentStatus},
        errors::DomainError,
        user::User,
    },
};

pub struct AddCommentCommand {
    pub article_id: ArticleId,
    pub content: String,
    pub parent_id: Option<CommentId>,
}

impl CommentModerationService {
    /// Create a comment on a published article. Spam content fails fast and
    /// is never persisted. New comments go through the same auto-approval
    /// policy as the moderation queue, so a trusted author's comment is
    /// created Approved and everyone else's Pending.
    pub async fn add_comment(
        &self,
        author: &User,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;

        if self.spam_detector.is_spam(content.as_str()).await? {
            return Err(DomainError::SpamDetected.into());
        }

        let article = self
            .article_repo
            .find_by_id(command.article_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::from(DomainError::validation(
                    "article_id",
                    "article does not exist",
                ))
            })?;
        if article.status != ArticleStatus::Published {
            return Err(DomainError::invalid_status(article.status, "published").into());
        }

        if let Some(parent_id) = command.parent_id {
            let parent = self
                .comment_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| {
                    ApplicationError::from(DomainError::validation(
                        "parent_id",
                        "parent comment does not exist",
                    ))
                })?;
            if parent.article_id != article.id {
                return Err(DomainError::validation(
                    "parent_id",
                    "parent comment belongs to a different article",
                )
                .into());
            }
            // Depth of the would-be reply: one more hop than its parent.
            let depth = self.reply_depth(&parent).await? + 1;
            if depth >= self.limits.max_reply_depth {
                return Err(DomainError::ReplyDepthExceeded {
                    max: self.limits.max_reply_depth,
                }
                .into());
            }
        }

        let now = self.clock.now();
        let mut comment = Comment::new(content, author.id, article.id, command.parent_id, now);

        let auto_approved = self.should_auto_approve(author.id).await?;
        if auto_approved {
            comment.approve(now)?;
        }

        let saved = self.comment_repo.save(comment).await?;

        if auto_approved {
            if !self
                .notifications
                .send(
                    author,
                    &Notification::new(
                        "Comment approved",
                        "Your comment was approved automatically.",
                    ),
                )
                .await
            {
                tracing::warn!(comment_id = %saved.id, "approval notification was not delivered");
            }
        }

        self.notify_user(
            article.author_id,
            Notification::new(
                "New comment",
                format!("'{}' received a new comment.", article.title),
            ),
        )
        .await;

        debug_assert!(matches!(
            saved.status,
            CommentStatus::Pending | CommentStatus::Approved
        ));
        Ok(saved.into())
    }
}
