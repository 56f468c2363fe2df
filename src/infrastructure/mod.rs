pub mod notification;
pub mod security;
pub mod spam;
pub mod time;
pub mod util;
