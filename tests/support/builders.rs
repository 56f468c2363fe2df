use chrono::Utc;
use std::collections::BTreeSet;
use tahrir_core::domain::article::{
    Article, ArticleContent, ArticleSlug, ArticleStatus, ArticleTitle,
};
use tahrir_core::domain::comment::{Comment, CommentContent, CommentId};
use tahrir_core::domain::user::{Email, PasswordHash, User, UserId};

use super::mocks::fixed_now;

pub const VALID_TITLE: &str = "A valid article title";
pub const PASSWORD: &str = "correct horse battery staple";

pub fn valid_content() -> String {
    "x".repeat(300)
}

pub fn reader(email: &str) -> User {
    User {
        id: UserId::generate(),
        email: Email::new(email).unwrap(),
        password_hash: PasswordHash::new(format!("hashed:{PASSWORD}")).unwrap(),
        is_admin: false,
        is_editor: false,
        is_moderator: false,
        can_publish: false,
        two_factor_enabled: false,
        failed_login_attempts: 0,
        last_login: None,
        created_at: Utc::now(),
    }
}

pub fn author(email: &str) -> User {
    User {
        can_publish: true,
        ..reader(email)
    }
}

pub fn moderator(email: &str) -> User {
    User {
        is_moderator: true,
        ..reader(email)
    }
}

pub fn editor(email: &str) -> User {
    User {
        is_editor: true,
        ..reader(email)
    }
}

pub fn sample_article(author_id: UserId, status: ArticleStatus) -> Article {
    sample_article_titled(author_id, status, VALID_TITLE)
}

pub fn sample_article_titled(author_id: UserId, status: ArticleStatus, title: &str) -> Article {
    let mut article = Article::new(
        ArticleTitle::new(title).unwrap(),
        ArticleSlug::new(slug::slugify(title)).unwrap(),
        ArticleContent::new(valid_content()).unwrap(),
        author_id,
        BTreeSet::from(["notes".to_owned()]),
        BTreeSet::new(),
        ArticleStatus::Draft,
        fixed_now(),
    );
    match status {
        ArticleStatus::Draft => {}
        ArticleStatus::Published => article.publish(fixed_now()).unwrap(),
        ArticleStatus::Archived => article.archive(fixed_now()).unwrap(),
        ArticleStatus::Deleted => article.status = ArticleStatus::Deleted,
    }
    article
}

pub fn pending_comment(
    author_id: UserId,
    article: &Article,
    parent_id: Option<CommentId>,
) -> Comment {
    Comment::new(
        CommentContent::new("a perfectly reasonable comment").unwrap(),
        author_id,
        article.id,
        parent_id,
        fixed_now(),
    )
}

pub fn approved_comment(author_id: UserId, article: &Article) -> Comment {
    let mut comment = pending_comment(author_id, article, None);
    comment.approve(fixed_now()).unwrap();
    comment
}
