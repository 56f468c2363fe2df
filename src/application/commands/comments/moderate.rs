// src/application/commands/comments/moderate.rs
use super::CommentModerationService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::notification::Notification,
    },
    domain::{
        comment::{Comment, CommentId, CommentStatus, ModerationAction},
        user::User,
    },
};

impl CommentModerationService {
    /// Apply a moderator decision. Approve rejects a double-approve, reject
    /// is idempotent, spam is forced. Approve/reject notify the comment
    /// author best-effort.
    pub async fn moderate(
        &self,
        moderator: &User,
        comment_id: CommentId,
        action: ModerationAction,
    ) -> ApplicationResult<CommentDto> {
        if !moderator.can_moderate() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to moderate comments",
            ));
        }

        let mut comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("comment {comment_id}")))?;

        let now = self.clock.now();
        match action {
            ModerationAction::Approve => comment.approve(now)?,
            ModerationAction::Reject => comment.reject(now),
            ModerationAction::Spam => comment.mark_spam(now),
        }

        let saved = self.comment_repo.save(comment).await?;

        if matches!(action, ModerationAction::Approve | ModerationAction::Reject) {
            self.notify_user(
                saved.author_id,
                Notification::new(
                    "Comment moderated",
                    format!("Your comment was {}.", saved.status),
                ),
            )
            .await;
        }

        Ok(saved.into())
    }

    /// Policy applied to a comment entering the moderation queue: spam flag
    /// first, then auto-approval for trusted authors, otherwise left
    /// Pending. Always persists.
    pub async fn moderate_new(&self, mut comment: Comment) -> ApplicationResult<CommentDto> {
        let now = self.clock.now();

        if self.spam_detector.is_spam(comment.content.as_str()).await? {
            comment.mark_spam(now);
        } else if comment.status == CommentStatus::Pending
            && self.should_auto_approve(comment.author_id).await?
        {
            comment.approve(now)?;
            self.notify_user(
                comment.author_id,
                Notification::new(
                    "Comment approved",
                    "Your comment was approved automatically.",
                ),
            )
            .await;
        }

        Ok(self.comment_repo.save(comment).await?.into())
    }
}
