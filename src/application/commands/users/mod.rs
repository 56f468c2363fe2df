// src/application/commands/users/mod.rs
mod login;
mod refresh;
mod service;
mod two_factor;

pub use login::LoginCommand;
pub use service::AuthCommandService;
