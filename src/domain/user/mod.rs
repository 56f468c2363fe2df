// src/domain/user/mod.rs
pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::User;
pub use events::AuthEvent;
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, UserId};
