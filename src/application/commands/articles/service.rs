// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::ports::{
    notification::NotificationDispatcher, search::SearchIndex, statistics::StatisticsRecorder,
    time::Clock,
};
use crate::domain::article::{ArticleRepository, services::ArticleSlugService};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) search_index: Arc<dyn SearchIndex>,
    pub(super) statistics: Arc<dyn StatisticsRecorder>,
    pub(super) notifications: Arc<dyn NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        slug_service: Arc<ArticleSlugService>,
        search_index: Arc<dyn SearchIndex>,
        statistics: Arc<dyn StatisticsRecorder>,
        notifications: Arc<dyn NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            search_index,
            statistics,
            notifications,
            clock,
        }
    }
}
