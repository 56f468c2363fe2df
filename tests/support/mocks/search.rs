use async_trait::async_trait;
use std::sync::Mutex;
use tahrir_core::application::ApplicationResult;
use tahrir_core::application::ports::search::{SearchHits, SearchIndex};
use tahrir_core::domain::article::{Article, ArticleId};

/// Records index maintenance calls and serves canned hits.
#[derive(Default)]
pub struct RecordingSearchIndex {
    pub indexed: Mutex<Vec<ArticleId>>,
    pub updated: Mutex<Vec<ArticleId>>,
    pub removed: Mutex<Vec<ArticleId>>,
    pub hits: Mutex<SearchHits>,
    pub fail_writes: Mutex<bool>,
}

impl RecordingSearchIndex {
    pub fn with_hits(hits: SearchHits) -> Self {
        Self {
            hits: Mutex::new(hits),
            ..Self::default()
        }
    }

    pub fn indexed_ids(&self) -> Vec<ArticleId> {
        self.indexed.lock().unwrap().clone()
    }

    pub fn removed_ids(&self) -> Vec<ArticleId> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchIndex for RecordingSearchIndex {
    async fn index(&self, article: &Article) -> bool {
        if *self.fail_writes.lock().unwrap() {
            return false;
        }
        self.indexed.lock().unwrap().push(article.id);
        true
    }

    async fn update(&self, article: &Article) -> bool {
        if *self.fail_writes.lock().unwrap() {
            return false;
        }
        self.updated.lock().unwrap().push(article.id);
        true
    }

    async fn remove(&self, article_id: ArticleId) -> bool {
        if *self.fail_writes.lock().unwrap() {
            return false;
        }
        self.removed.lock().unwrap().push(article_id);
        true
    }

    async fn search(
        &self,
        _query: &str,
        _page: u32,
        _page_size: u32,
    ) -> ApplicationResult<SearchHits> {
        Ok(self.hits.lock().unwrap().clone())
    }
}
