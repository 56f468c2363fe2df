use async_trait::async_trait;
use std::sync::Mutex;
use tahrir_core::application::ports::notification::{Notification, NotificationDispatcher};
use tahrir_core::domain::user::User;

/// Captures (recipient email, subject) pairs instead of delivering.
#[derive(Default)]
pub struct RecordingDispatcher {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_all: Mutex<bool>,
}

impl RecordingDispatcher {
    pub fn sent_subjects(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, subject)| subject.clone())
            .collect()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn send(&self, user: &User, notification: &Notification) -> bool {
        if *self.fail_all.lock().unwrap() {
            return false;
        }
        self.sent
            .lock()
            .unwrap()
            .push((user.email.to_string(), notification.subject.clone()));
        true
    }
}
