use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
    pub is_editor: bool,
    pub is_moderator: bool,
    pub can_publish: bool,
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.into(),
            is_admin: user.is_admin,
            is_editor: user.is_editor,
            is_moderator: user.is_moderator,
            can_publish: user.can_publish,
            two_factor_enabled: user.two_factor_enabled,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}
