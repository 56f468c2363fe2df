// src/application/queries/articles/mod.rs
mod get;
mod search;
mod service;
mod stats;

pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
