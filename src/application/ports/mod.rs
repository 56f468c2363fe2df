// src/application/ports/mod.rs
pub mod notification;
pub mod otp;
pub mod search;
pub mod security;
pub mod spam;
pub mod statistics;
pub mod time;
pub mod util;
