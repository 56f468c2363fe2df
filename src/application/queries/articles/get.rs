// src/application/queries/articles/get.rs
use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{ArticleId, ArticleSlug};

impl ArticleQueryService {
    pub async fn get_article(&self, id: ArticleId) -> ApplicationResult<ArticleDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))
    }

    pub async fn get_article_by_slug(&self, slug: &str) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("article with slug '{slug}'")))
    }
}
