use std::sync::Arc;
use std::time::Duration;

use tahrir_core::application::commands::articles::ArticleCommandService;
use tahrir_core::application::commands::comments::CommentModerationService;
use tahrir_core::application::commands::users::AuthCommandService;
use tahrir_core::application::queries::articles::ArticleQueryService;
use tahrir_core::config::{AuthLimits, ModerationLimits};
use tahrir_core::domain::article::{Article, services::ArticleSlugService};
use tahrir_core::domain::comment::Comment;
use tahrir_core::domain::user::User;
use tahrir_core::infrastructure::security::{HmacTokenManager, InMemoryOtpStore};
use tahrir_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{
    FixedClock, InMemoryArticleRepo, InMemoryCommentRepo, InMemoryUserRepo, RecordingDispatcher,
    RecordingSearchIndex, RecordingStatistics, StubSpamDetector,
};

pub const TOKEN_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// Installs a fmt subscriber once per test binary; RUST_LOG picks the level.
static TRACING: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    once_cell::sync::Lazy::force(&TRACING);
}

pub struct ArticleHarness {
    pub service: ArticleCommandService,
    pub queries: ArticleQueryService,
    pub repo: Arc<InMemoryArticleRepo>,
    pub search: Arc<RecordingSearchIndex>,
    pub stats: Arc<RecordingStatistics>,
    pub notify: Arc<RecordingDispatcher>,
    pub clock: Arc<FixedClock>,
}

pub fn article_harness(articles: Vec<Article>) -> ArticleHarness {
    init_tracing();
    let repo = Arc::new(InMemoryArticleRepo::with(articles));
    let search = Arc::new(RecordingSearchIndex::default());
    let stats = Arc::new(RecordingStatistics::default());
    let notify = Arc::new(RecordingDispatcher::default());
    let clock = Arc::new(FixedClock::default());
    let slug_service = Arc::new(ArticleSlugService::new(
        repo.clone(),
        Arc::new(DefaultSlugGenerator),
    ));

    ArticleHarness {
        service: ArticleCommandService::new(
            repo.clone(),
            slug_service,
            search.clone(),
            stats.clone(),
            notify.clone(),
            clock.clone(),
        ),
        queries: ArticleQueryService::new(repo.clone(), search.clone(), stats.clone()),
        repo,
        search,
        stats,
        notify,
        clock,
    }
}

pub struct CommentHarness {
    pub service: CommentModerationService,
    pub comments: Arc<InMemoryCommentRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub notify: Arc<RecordingDispatcher>,
    pub clock: Arc<FixedClock>,
}

pub fn comment_harness(
    comments: Vec<Comment>,
    articles: Vec<Article>,
    users: Vec<User>,
    spam: StubSpamDetector,
) -> CommentHarness {
    init_tracing();
    let comment_repo = Arc::new(InMemoryCommentRepo::with(comments));
    let article_repo = Arc::new(InMemoryArticleRepo::with(articles));
    let user_repo = Arc::new(InMemoryUserRepo::with(users));
    let notify = Arc::new(RecordingDispatcher::default());
    let clock = Arc::new(FixedClock::default());

    CommentHarness {
        service: CommentModerationService::new(
            comment_repo.clone(),
            article_repo.clone(),
            user_repo.clone(),
            Arc::new(spam),
            notify.clone(),
            clock.clone(),
            ModerationLimits::default(),
        ),
        comments: comment_repo,
        articles: article_repo,
        users: user_repo,
        notify,
        clock,
    }
}

pub struct AuthHarness {
    pub service: AuthCommandService,
    pub users: Arc<InMemoryUserRepo>,
    pub clock: Arc<FixedClock>,
}

pub fn auth_harness(users: Vec<User>) -> AuthHarness {
    auth_harness_with_hasher(users, Arc::new(super::mocks::DummyPasswordHasher))
}

pub fn auth_harness_with_hasher(
    users: Vec<User>,
    hasher: Arc<dyn tahrir_core::application::ports::security::PasswordHasher>,
) -> AuthHarness {
    init_tracing();
    let user_repo = Arc::new(InMemoryUserRepo::with(users));
    let clock = Arc::new(FixedClock::default());
    let token_manager = Arc::new(HmacTokenManager::new(
        TOKEN_SECRET,
        Duration::from_secs(900),
        Duration::from_secs(604_800),
        clock.clone(),
    ));
    let otp_store = Arc::new(InMemoryOtpStore::new(clock.clone()));

    AuthHarness {
        service: AuthCommandService::new(
            user_repo.clone(),
            hasher,
            token_manager,
            otp_store,
            clock.clone(),
            AuthLimits::default(),
        ),
        users: user_repo,
        clock,
    }
}
