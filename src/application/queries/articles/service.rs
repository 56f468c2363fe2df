// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::application::ports::{search::SearchIndex, statistics::StatisticsRecorder};
use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) search_index: Arc<dyn SearchIndex>,
    pub(super) statistics: Arc<dyn StatisticsRecorder>,
}

impl ArticleQueryService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        search_index: Arc<dyn SearchIndex>,
        statistics: Arc<dyn StatisticsRecorder>,
    ) -> Self {
        Self {
            repo,
            search_index,
            statistics,
        }
    }
}
