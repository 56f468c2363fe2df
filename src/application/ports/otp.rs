// src/application/ports/otp.rs
use crate::application::ApplicationResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One pending verification code, keyed by user id.
#[derive(Debug, Clone)]
pub struct OtpRecord {
    pub code: String,
    pub attempts: u32,
    pub expires_at: DateTime<Utc>,
}

/// Short-TTL side store with cache semantics: `put` overwrites, `get`
/// returns None once the record has expired, `remove` purges. No
/// transactional coupling to the primary datastore.
#[async_trait]
pub trait OtpStore: Send + Sync {
    async fn put(&self, user_id: UserId, record: OtpRecord) -> ApplicationResult<()>;
    async fn get(&self, user_id: UserId) -> ApplicationResult<Option<OtpRecord>>;
    async fn remove(&self, user_id: UserId) -> ApplicationResult<()>;
}
