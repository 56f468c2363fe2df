use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence contract for the article aggregate. `save` is update-or-create
/// and must be atomic for the whole aggregate; it is the serialization point
/// for concurrent use-case invocations.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn exists_by_title(&self, title: &str) -> DomainResult<bool>;
    async fn save(&self, article: Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Published articles, page starting at 1.
    async fn list_published(&self, page: u32, page_size: u32) -> DomainResult<Vec<Article>>;
}
