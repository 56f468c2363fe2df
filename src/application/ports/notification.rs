// src/application/ports/notification.rs
use crate::domain::user::User;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Outbound delivery capability. Returns false on failure and never errors
/// into the orchestrator; all notification sends are best-effort.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn send(&self, user: &User, notification: &Notification) -> bool;
}
