// src/application/commands/articles/index_sweep.rs
use super::ArticleCommandService;
use crate::application::{
    dto::IndexSweep,
    error::{ApplicationError, ApplicationResult},
};

impl ArticleCommandService {
    /// Re-index every published article, one page at a time. Per-item
    /// failures are counted and logged; the sweep never aborts.
    pub async fn index_published_articles(
        &self,
        page_size: u32,
    ) -> ApplicationResult<IndexSweep> {
        if page_size == 0 {
            return Err(ApplicationError::validation("page_size must be positive"));
        }

        let mut sweep = IndexSweep::default();
        let mut page = 1u32;

        loop {
            let articles = self.repo.list_published(page, page_size).await?;
            if articles.is_empty() {
                break;
            }

            for article in &articles {
                if self.search_index.index(article).await {
                    sweep.indexed += 1;
                } else {
                    sweep.failed += 1;
                    tracing::warn!(article_id = %article.id, "index sweep: article skipped");
                }
            }

            page += 1;
        }

        Ok(sweep)
    }
}
