use crate::application::{
    ApplicationResult,
    ports::{
        otp::{OtpRecord, OtpStore},
        time::Clock,
    },
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Process-local store for pending verification codes. Expired records are
/// dropped lazily on read, matching cache semantics without a sweeper task.
pub struct InMemoryOtpStore {
    records: Mutex<HashMap<UserId, OtpRecord>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryOtpStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put(&self, user_id: UserId, record: OtpRecord) -> ApplicationResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(user_id, record);
        Ok(())
    }

    async fn get(&self, user_id: UserId) -> ApplicationResult<Option<OtpRecord>> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match records.get(&user_id) {
            Some(record) if record.expires_at <= self.clock.now() => {
                records.remove(&user_id);
                Ok(None)
            }
            Some(record) => Ok(Some(record.clone())),
            None => Ok(None),
        }
    }

    async fn remove(&self, user_id: UserId) -> ApplicationResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&user_id);
        Ok(())
    }
}
