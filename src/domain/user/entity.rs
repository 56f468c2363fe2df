// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId};
use chrono::{DateTime, Utc};

/// Identity consumed by this core; owned by the external identity system.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub is_admin: bool,
    pub is_editor: bool,
    pub is_moderator: bool,
    pub can_publish: bool,
    pub two_factor_enabled: bool,
    pub failed_login_attempts: u32,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn record_failed_login(&mut self) {
        self.failed_login_attempts += 1;
    }

    pub fn record_successful_login(&mut self, now: DateTime<Utc>) {
        self.failed_login_attempts = 0;
        self.last_login = Some(now);
    }

    /// The lock persists until a successful login path resets the counter.
    pub fn is_locked(&self, max_attempts: u32) -> bool {
        self.failed_login_attempts >= max_attempts
    }

    pub fn can_moderate(&self) -> bool {
        self.is_admin || self.is_moderator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::generate(),
            email: Email::new("reader@example.com").unwrap(),
            password_hash: PasswordHash::new("hash").unwrap(),
            is_admin: false,
            is_editor: false,
            is_moderator: false,
            can_publish: false,
            two_factor_enabled: false,
            failed_login_attempts: 0,
            last_login: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn lockout_after_max_attempts() {
        let mut user = sample_user();
        for _ in 0..5 {
            user.record_failed_login();
        }
        assert!(user.is_locked(5));
        assert!(!user.is_locked(6));

        let now = Utc::now();
        user.record_successful_login(now);
        assert!(!user.is_locked(5));
        assert_eq!(user.last_login, Some(now));
    }

    #[test]
    fn email_validation() {
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@example.com").is_ok());
    }
}
