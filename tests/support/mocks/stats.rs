use async_trait::async_trait;
use std::sync::Mutex;
use tahrir_core::application::ApplicationResult;
use tahrir_core::application::ports::statistics::{ArticleStats, StatisticsRecorder};
use tahrir_core::domain::article::ArticleId;

#[derive(Default)]
pub struct RecordingStatistics {
    pub views: Mutex<Vec<ArticleId>>,
    pub searches: Mutex<Vec<(String, u64)>>,
}

#[async_trait]
impl StatisticsRecorder for RecordingStatistics {
    async fn record_view(&self, article_id: ArticleId) -> bool {
        self.views.lock().unwrap().push(article_id);
        true
    }

    async fn record_search(&self, query: &str, result_count: u64) -> bool {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_owned(), result_count));
        true
    }

    async fn article_stats(&self, _article_id: ArticleId) -> ApplicationResult<ArticleStats> {
        Ok(ArticleStats::default())
    }
}
