// src/application/commands/comments/mod.rs
mod add;
mod batch;
mod moderate;
mod service;

pub use add::AddCommentCommand;
pub use service::CommentModerationService;
