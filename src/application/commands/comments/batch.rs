// src/application/commands/comments/batch.rs
use super::CommentModerationService;
use crate::{
    application::{
        dto::{BatchApproveOutcome, SpamSweep},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentId, CommentStatus},
        user::User,
    },
};

impl CommentModerationService {
    /// Approve every Pending comment in `ids`. Failures are isolated per
    /// item: a missing id or a storage error is counted, never raised.
    pub async fn batch_approve(
        &self,
        moderator: &User,
        ids: &[CommentId],
    ) -> ApplicationResult<BatchApproveOutcome> {
        if !moderator.can_moderate() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to moderate comments",
            ));
        }

        let mut outcome = BatchApproveOutcome {
            total: ids.len() as u64,
            ..BatchApproveOutcome::default()
        };

        for &id in ids {
            match self.approve_if_pending(id).await {
                Ok(true) => outcome.approved += 1,
                Ok(false) => outcome.failed += 1,
                Err(err) => {
                    outcome.failed += 1;
                    tracing::warn!(comment_id = %id, error = %err, "batch approve: item skipped");
                }
            }
        }

        Ok(outcome)
    }

    async fn approve_if_pending(&self, id: CommentId) -> ApplicationResult<bool> {
        let Some(mut comment) = self.comment_repo.find_by_id(id).await? else {
            return Ok(false);
        };
        if comment.status != CommentStatus::Pending {
            return Ok(false);
        }

        comment.approve(self.clock.now())?;
        let saved = self.comment_repo.save(comment).await?;

        self.notify_user(
            saved.author_id,
            crate::application::ports::notification::Notification::new(
                "Comment approved",
                "Your comment was approved.",
            ),
        )
        .await;

        Ok(true)
    }

    /// Sweep the Pending queue: spam-check each comment, auto-approve
    /// trusted authors, persist, and keep going past per-item failures.
    pub async fn detect_spam(&self, page_size: u32) -> ApplicationResult<SpamSweep> {
        if page_size == 0 {
            return Err(ApplicationError::validation("page_size must be positive"));
        }

        let mut sweep = SpamSweep::default();
        let mut page = 1u32;

        loop {
            let pending = self.comment_repo.list_pending(page, page_size).await?;
            if pending.is_empty() {
                break;
            }

            for comment in pending {
                let id = comment.id;
                match self.scan_pending_comment(comment).await {
                    Ok(scan) => {
                        sweep.checked += 1;
                        match scan {
                            ScanVerdict::Spam => sweep.spam_detected += 1,
                            ScanVerdict::Approved => sweep.approved += 1,
                            ScanVerdict::Unchanged => {}
                        }
                    }
                    Err(err) => {
                        tracing::warn!(comment_id = %id, error = %err, "spam sweep: item skipped");
                    }
                }
            }

            page += 1;
        }

        Ok(sweep)
    }

    async fn scan_pending_comment(
        &self,
        mut comment: crate::domain::comment::Comment,
    ) -> ApplicationResult<ScanVerdict> {
        let now = self.clock.now();

        let verdict = if self.spam_detector.is_spam(comment.content.as_str()).await? {
            comment.mark_spam(now);
            ScanVerdict::Spam
        } else if self.should_auto_approve(comment.author_id).await? {
            comment.approve(now)?;
            ScanVerdict::Approved
        } else {
            ScanVerdict::Unchanged
        };

        self.comment_repo.save(comment).await?;
        Ok(verdict)
    }
}

enum ScanVerdict {
    Spam,
    Approved,
    Unchanged,
}
