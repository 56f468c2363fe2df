#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notify;
pub mod repos;
pub mod search;
pub mod security;
pub mod spam;
pub mod stats;
pub mod time;

pub use notify::RecordingDispatcher;
pub use repos::{InMemoryArticleRepo, InMemoryCommentRepo, InMemoryUserRepo};
pub use search::RecordingSearchIndex;
pub use security::DummyPasswordHasher;
pub use spam::StubSpamDetector;
pub use stats::RecordingStatistics;
pub use time::{FixedClock, fixed_now};
