// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::application::{
    dto::SearchResultDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct SearchArticlesQuery {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchArticlesQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: 10,
        }
    }
}

impl ArticleQueryService {
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<SearchResultDto> {
        let trimmed = query.query.trim();
        if trimmed.chars().count() < 3 {
            return Err(ApplicationError::validation(
                "search query must be at least 3 characters long",
            ));
        }
        if query.page < 1 {
            return Err(ApplicationError::validation("page starts at 1"));
        }
        if query.page_size < 1 || query.page_size > 100 {
            return Err(ApplicationError::validation(
                "page_size must be between 1 and 100",
            ));
        }

        let hits = self
            .search_index
            .search(trimmed, query.page, query.page_size)
            .await?;

        if !self.statistics.record_search(trimmed, hits.total).await {
            tracing::warn!(query = trimmed, "search was not recorded in statistics");
        }

        Ok(SearchResultDto {
            articles: hits.articles.into_iter().map(Into::into).collect(),
            total: hits.total,
            page: query.page,
            page_size: query.page_size,
        })
    }
}
