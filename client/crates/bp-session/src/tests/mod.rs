mod subscription;

use crate::{Result as SessionErrorResult, SessionError, SessionStorage};

use bp_core::UserProfile;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

pub(crate) fn profile(id: &str, name: &str) -> UserProfile {
    UserProfile {
        name: name.into(),
        income: 50_000.0,
        ..UserProfile::new(id, format!("{id}@example.com"))
    }
}

/// Storage whose operations fail on demand.
#[derive(Default)]
pub(crate) struct FailingStorage {
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl FailingStorage {
    pub fn failing_writes() -> Self {
        let storage = Self::default();
        storage.fail_writes.store(true, Ordering::SeqCst);
        storage
    }

    pub fn failing_reads() -> Self {
        let storage = Self::default();
        storage.fail_reads.store(true, Ordering::SeqCst);
        storage
    }
}

#[async_trait]
impl SessionStorage for FailingStorage {
    async fn read(&self, _key: &str) -> SessionErrorResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SessionError::storage("disk unavailable"));
        }
        Ok(None)
    }

    async fn write(&self, _key: &str, _value: &str) -> SessionErrorResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SessionError::storage("quota exceeded"));
        }
        Ok(())
    }

    async fn erase(&self, _key: &str) -> SessionErrorResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SessionError::storage("quota exceeded"));
        }
        Ok(())
    }
}

/// Storage whose `read` parks until released, returning a fixed blob.
pub(crate) struct GatedStorage {
    pub blob: String,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedStorage {
    pub fn new(blob: String) -> Self {
        Self {
            blob,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl SessionStorage for GatedStorage {
    async fn read(&self, _key: &str) -> SessionErrorResult<Option<String>> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Some(self.blob.clone()))
    }

    async fn write(&self, _key: &str, _value: &str) -> SessionErrorResult<()> {
        Ok(())
    }

    async fn erase(&self, _key: &str) -> SessionErrorResult<()> {
        Ok(())
    }
}
