use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use tahrir_core::domain::article::{Article, ArticleId, ArticleRepository, ArticleSlug, ArticleStatus};
use tahrir_core::domain::comment::{Comment, CommentId, CommentRepository, CommentStatus};
use tahrir_core::domain::errors::{DomainError, DomainResult};
use tahrir_core::domain::user::{Email, User, UserId, UserRepository};

/* ------------------------------ articles ------------------------------ */

#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Vec<Article>>,
    pub fail_saves: Mutex<bool>,
}

impl InMemoryArticleRepo {
    pub fn with(articles: Vec<Article>) -> Self {
        Self {
            inner: Mutex::new(articles),
            fail_saves: Mutex::new(false),
        }
    }

    pub fn get(&self, id: ArticleId) -> Option<Article> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn exists_by_title(&self, title: &str) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.title.as_str() == title))
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        if *self.fail_saves.lock().unwrap() {
            return Err(DomainError::Persistence("save failed".into()));
        }
        let mut items = self.inner.lock().unwrap();
        match items.iter_mut().find(|a| a.id == article.id) {
            Some(slot) => *slot = article.clone(),
            None => items.push(article.clone()),
        }
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn list_published(&self, page: u32, page_size: u32) -> DomainResult<Vec<Article>> {
        let items = self.inner.lock().unwrap();
        Ok(items
            .iter()
            .filter(|a| a.status == ArticleStatus::Published)
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .cloned()
            .collect())
    }
}

/* ------------------------------ comments ------------------------------ */

#[derive(Default)]
pub struct InMemoryCommentRepo {
    inner: Mutex<Vec<Comment>>,
    /// Saves for these ids fail; exercises per-item isolation in batches.
    pub fail_ids: Mutex<Vec<CommentId>>,
}

impl InMemoryCommentRepo {
    pub fn with(comments: Vec<Comment>) -> Self {
        Self {
            inner: Mutex::new(comments),
            fail_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn get(&self, id: CommentId) -> Option<Comment> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.get(id))
    }

    async fn save(&self, comment: Comment) -> DomainResult<Comment> {
        if self.fail_ids.lock().unwrap().contains(&comment.id) {
            return Err(DomainError::Persistence("save failed".into()));
        }
        let mut items = self.inner.lock().unwrap();
        match items.iter_mut().find(|c| c.id == comment.id) {
            Some(slot) => *slot = comment.clone(),
            None => items.push(comment.clone()),
        }
        Ok(comment)
    }

    async fn list_pending(&self, page: u32, page_size: u32) -> DomainResult<Vec<Comment>> {
        let items = self.inner.lock().unwrap();
        Ok(items
            .iter()
            .filter(|c| c.status == CommentStatus::Pending)
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn count_approved_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let items = self.inner.lock().unwrap();
        Ok(items
            .iter()
            .filter(|c| c.author_id == author_id && c.status == CommentStatus::Approved)
            .count() as u64)
    }
}

/* ------------------------------- users ------------------------------- */

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepo {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            inner: Mutex::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn save(&self, user: User) -> DomainResult<User> {
        self.inner.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }
}
