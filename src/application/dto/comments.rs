use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub article_id: String,
    pub status: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content.into(),
            author_id: comment.author_id.to_string(),
            article_id: comment.article_id.to_string(),
            status: comment.status.to_string(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Per-batch counters; one bad id never aborts the batch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BatchApproveOutcome {
    pub total: u64,
    pub approved: u64,
    pub failed: u64,
}

/// Counters from a spam-detection sweep over pending comments.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpamSweep {
    pub checked: u64,
    pub spam_detected: u64,
    pub approved: u64,
}
