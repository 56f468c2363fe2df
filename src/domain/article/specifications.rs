use crate::domain::article::entity::Article;
use crate::domain::user::User;

/// Admins, editors, and the author may modify (update/archive) an article.
pub struct CanModifyArticleSpec<'a> {
    article: &'a Article,
    user: &'a User,
}

impl<'a> CanModifyArticleSpec<'a> {
    pub fn new(article: &'a Article, user: &'a User) -> Self {
        Self { article, user }
    }

    pub fn is_satisfied(&self) -> bool {
        self.user.is_admin || self.user.is_editor || self.article.author_id == self.user.id
    }
}

/// Publishing additionally requires the `can_publish` flag when the actor is
/// only the author.
pub struct CanPublishArticleSpec<'a> {
    article: &'a Article,
    user: &'a User,
}

impl<'a> CanPublishArticleSpec<'a> {
    pub fn new(article: &'a Article, user: &'a User) -> Self {
        Self { article, user }
    }

    pub fn is_satisfied(&self) -> bool {
        self.user.is_admin
            || self.user.is_editor
            || (self.article.author_id == self.user.id && self.user.can_publish)
    }
}
