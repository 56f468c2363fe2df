use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author_id: String,
    pub status: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub comment_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: u64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.into(),
            slug: article.slug.into(),
            content: article.content.into(),
            author_id: article.author_id.to_string(),
            status: article.status.to_string(),
            tags: article.tags.into_iter().collect(),
            categories: article.categories.iter().map(ToString::to_string).collect(),
            comment_ids: article.comments.iter().map(ToString::to_string).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
            view_count: article.view_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub articles: Vec<ArticleDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Outcome of a full re-index sweep over published articles.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IndexSweep {
    pub indexed: u64,
    pub failed: u64,
}
