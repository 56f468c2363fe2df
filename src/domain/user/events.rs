use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoggedIn { user_id: UserId, at: DateTime<Utc> },
}
