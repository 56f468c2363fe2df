use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn save(&self, comment: Comment) -> DomainResult<Comment>;
    /// Pending comments, page starting at 1.
    async fn list_pending(&self, page: u32, page_size: u32) -> DomainResult<Vec<Comment>>;
    /// Number of Approved comments by the given author; drives auto-approval.
    async fn count_approved_by_author(&self, author_id: UserId) -> DomainResult<u64>;
}
