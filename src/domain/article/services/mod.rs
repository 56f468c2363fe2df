// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// Domain service responsible for producing slugs that are unique across
/// non-deleted articles.
pub struct ArticleSlugService {
    repo: Arc<dyn ArticleRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(repo: Arc<dyn ArticleRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("article-{}", now.timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self.repo.find_by_slug(&slug).await? {
                Some(existing) if existing.status == ArticleStatus::Deleted => {
                    return Ok(slug);
                }
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
