// src/application/commands/articles/mod.rs
mod archive;
mod create;
mod index_sweep;
mod publish;
mod service;
mod update;
mod view;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
