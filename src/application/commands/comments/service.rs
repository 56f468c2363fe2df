// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::application::ports::{
    notification::{Notification, NotificationDispatcher},
    spam::SpamDetector,
    time::Clock,
};
use crate::config::ModerationLimits;
use crate::domain::{
    article::ArticleRepository,
    comment::{Comment, CommentRepository},
    errors::DomainResult,
    user::{UserId, UserRepository},
};

pub struct CommentModerationService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) spam_detector: Arc<dyn SpamDetector>,
    pub(super) notifications: Arc<dyn NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) limits: ModerationLimits,
}

impl CommentModerationService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        user_repo: Arc<dyn UserRepository>,
        spam_detector: Arc<dyn SpamDetector>,
        notifications: Arc<dyn NotificationDispatcher>,
        clock: Arc<dyn Clock>,
        limits: ModerationLimits,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            user_repo,
            spam_detector,
            notifications,
            clock,
            limits,
        }
    }

    /// Walk the parent chain upward, counting hops to the root. A missing
    /// ancestor breaks the walk at that point without being an error.
    pub(super) async fn reply_depth(&self, comment: &Comment) -> DomainResult<u32> {
        let mut depth = 0u32;
        let mut parent_id = comment.parent_id;

        while let Some(id) = parent_id {
            match self.comment_repo.find_by_id(id).await? {
                Some(parent) => {
                    depth += 1;
                    parent_id = parent.parent_id;
                }
                None => break,
            }
        }

        Ok(depth)
    }

    /// Auto-approval applies to authors with enough previously approved
    /// comments.
    pub(super) async fn should_auto_approve(&self, author_id: UserId) -> DomainResult<bool> {
        let approved = self.comment_repo.count_approved_by_author(author_id).await?;
        Ok(approved >= self.limits.auto_approve_threshold)
    }

    /// Best-effort delivery to a user looked up by id; missing recipients
    /// and transport failures are logged and swallowed.
    pub(super) async fn notify_user(&self, user_id: UserId, notification: Notification) {
        match self.user_repo.find_by_id(user_id).await {
            Ok(Some(user)) => {
                if !self.notifications.send(&user, &notification).await {
                    tracing::warn!(%user_id, "comment notification was not delivered");
                }
            }
            Ok(None) => {
                tracing::warn!(%user_id, "comment notification recipient no longer exists");
            }
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "failed to load notification recipient");
            }
        }
    }
}
