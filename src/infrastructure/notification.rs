use crate::application::ports::notification::{Notification, NotificationDispatcher};
use crate::domain::user::User;
use async_trait::async_trait;

/// Dispatcher that only records the notification in the log stream. Real
/// transports (email, SMS) live outside the core and replace this at
/// composition time.
#[derive(Default, Clone)]
pub struct LogNotificationDispatcher;

#[async_trait]
impl NotificationDispatcher for LogNotificationDispatcher {
    async fn send(&self, user: &User, notification: &Notification) -> bool {
        tracing::info!(
            recipient = %user.email,
            subject = %notification.subject,
            "notification dispatched to log"
        );
        true
    }
}
