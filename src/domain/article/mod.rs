pub mod entity;
pub mod events;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::Article;
pub use repository::ArticleRepository;
pub use value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, CategoryId,
};
